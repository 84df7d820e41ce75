use std::panic;
use std::sync::Once;

use super::point;
use crate::types::alloc_type::{Box, String};
use crate::types::error_formatter::{ChainFormatConfig, ChainFormatter};
use crate::types::{BoxError, ChainedError, CAST_MESSAGE};

static INSTALL: Once = Once::new();

/// Installs the panic hook that renders aborts nobody is going to recover.
///
/// The default hook reports an abort payload as `Box<dyn Any>`. With this
/// hook installed, an abort raised outside every recovery point is printed
/// with its whole chain (messages, depth and root cause), while aborts raised
/// inside a recovery point print nothing. Every other panic is passed on to
/// the hook that was installed before.
///
/// [`abort`](super::abort) and every recovery point call this on first use,
/// so calling it by hand is only needed to replace a hook that was set later.
/// Only the first call has an effect.
pub fn install_panic_hook() {
    INSTALL.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let Some(rendered) = render_payload(info.payload()) else {
                return previous(info);
            };
            if point::is_active() {
                return;
            }
            #[cfg(feature = "tracing")]
            tracing::error!(chain = %rendered, "abort reached no recovery point");
            match info.location() {
                Some(location) => eprintln!("unrecovered abort at {location}:\n{rendered}"),
                None => eprintln!("unrecovered abort:\n{rendered}"),
            }
        }));
    });
}

/// Renders an error-like payload the way a recovery point would receive it.
fn render_payload(payload: &(dyn std::any::Any + Send)) -> Option<String> {
    if let Some(error) = payload.downcast_ref::<ChainedError>() {
        return Some(alloc::format!("{error:#}"));
    }
    let error = payload.downcast_ref::<BoxError>()?;
    if let Some(chained) = crate::chain::dereference::<ChainedError>(&**error) {
        return Some(alloc::format!("{chained:#}"));
    }
    let config = ChainFormatConfig::cascaded();
    let items = [config.format_link(CAST_MESSAGE, 1), config.format_cause(error)];
    Some(config.format_chain(items.into_iter()))
}
