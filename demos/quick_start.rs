use fault_rail::prelude::*;

fn read_config() -> String {
    // Fail fast: a missing file aborts to the nearest recovery point.
    std::fs::read_to_string("config.toml").chained("loading configuration").cast().check()
}

fn parse_workers(raw: &str, warnings: &mut Option<ChainedError>) -> usize {
    // Fail through: a bad value is recorded and the default is kept.
    raw.trim().parse::<usize>().handle(|err| {
        warnings.push_cause(err);
    })
}

fn start(port: u16) -> u16 {
    ensure!(port != 0, "port {} is reserved", port);
    port
}

fn main() {
    println!("Running Quick Start examples...");

    // 1. Fail Fast
    println!("\n1. Fail Fast:");
    let config = recovery_point(|err| println!("Recovered: {}", err), read_config);
    println!("Config loaded: {}", config.is_some());

    // 2. Fail Through
    println!("\n2. Fail Through:");
    let mut warnings = None;
    let workers = parse_workers("four", &mut warnings);
    let threads = parse_workers("", &mut warnings);
    println!("Workers: {workers}, threads: {threads}");
    if let Some(warnings) = &warnings {
        println!("Warnings ({}):\n{:#}", warnings.count(), warnings);
    }

    // 3. Chain Inspection
    println!("\n3. Chain Inspection:");
    let err = wrap!(chained!("disk quota exceeded"), "saving {}", "report.pdf");
    println!("Contains quota error: {}", chain::is(&err, &chained!("disk quota exceeded")));

    // 4. Macros and Guards
    println!("\n4. Macros and Guards:");
    for port in [8080, 0] {
        match recovery_point(|err| println!("Refused: {}", err.message()), || start(port)) {
            Some(port) => println!("Listening on {port}"),
            None => println!("Port {port} not started"),
        }
    }
}
