use clap::Parser;
use resgen::{check_symbols, generate, print_dump, Args, Error, Msg, Report};
use std::error::Error as _;

fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        Msg::Error(err.to_string()).print();
        let mut source = err.source();
        while let Some(cause) = source {
            Msg::Note(cause.to_string()).print();
            source = cause.source();
        }
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let report = Report::new(args.quiet);
    report.banner();

    report.step(1, "Collect Resources");
    let config = args.config()?;
    for entry in &config.resources {
        report.input(&entry.path, &entry.alias);
    }
    if config.strict {
        for alias in check_symbols(&config.resources)? {
            Msg::Warn(format!("Re-declared alias: `{}`", alias)).print();
            Msg::Note(format!("Only the first declaration of `{}` is reachable", alias)).print();
        }
    }

    report.step(2, &format!("Generate [{}]", config.backend));
    let backend = config.backend.backend();
    let artifacts = generate(&config, backend.as_ref())?;
    if artifacts.assembly.is_none() && artifacts.header.is_none() {
        report.note("No output requested");
    }

    report.step(3, "Write Artifacts");
    for path in artifacts.write(&config)? {
        report.output(&path);
    }

    if args.dump {
        print_dump(&config.resources);
    }
    Ok(())
}
