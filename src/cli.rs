// src/cli.rs
use std::path::PathBuf;

use crate::config::consts::{DEFAULT_SCRAPE_FILE, DEFAULT_SQL_FILE};
use crate::config::options::{
    AppOptions, Command, NormalizeOptions, NumberSource, ScrapeOptions, SupervisorOptions,
};
use crate::error::{Error, Result};
use crate::file::resolve_single_out_path;
use crate::progress::StderrProgress;
use crate::{normalize, scrape, supervisors};

pub const HELP: &str = include_str!("cli_help.txt");

pub fn parse_args<I>(args: I) -> Result<AppOptions>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = AppOptions::default();
    let mut args = args.into_iter();

    // global flags may precede the subcommand
    let command = loop {
        let Some(a) = args.next() else { return Ok(opts) };
        match a.as_str() {
            "--log-file" => opts.log_file = Some(PathBuf::from(value(&mut args, &a)?)),
            "-h" | "--help" | "help" => return Ok(opts),
            _ => break a,
        }
    };

    opts.command = match command.as_str() {
        "normalize" => Command::Normalize(parse_normalize(&mut args, &mut opts)?),
        "scrape" => Command::Scrape(parse_scrape(&mut args, &mut opts)?),
        "supervisors" => Command::Supervisors(parse_supervisors(&mut args, &mut opts)?),
        other => return Err(Error::usage(format!("Unknown command: {other} (try --help)"))),
    };
    Ok(opts)
}

fn parse_normalize(
    args: &mut impl Iterator<Item = String>,
    app: &mut AppOptions,
) -> Result<NormalizeOptions> {
    let mut opts = NormalizeOptions::default();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-f" | "--file" => opts.file = PathBuf::from(value(args, &a)?),
            "--region" => opts.region = value(args, &a)?,
            "-o" | "--out" => opts.out = Some(PathBuf::from(value(args, &a)?)),
            _ => global_or_unknown(args, app, &a)?,
        }
    }
    Ok(opts)
}

fn parse_scrape(
    args: &mut impl Iterator<Item = String>,
    app: &mut AppOptions,
) -> Result<ScrapeOptions> {
    let mut opts = ScrapeOptions::default();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-o" | "--out" => opts.out = PathBuf::from(value(args, &a)?),
            "--villages" => opts.villages = true,
            "--pause-ms" => {
                let v = value(args, &a)?;
                opts.pause_ms = v
                    .parse()
                    .map_err(|_| Error::usage(format!("Invalid --pause-ms: {v}")))?;
            }
            "--district" => opts.districts.push(value(args, &a)?),
            "--url" => opts.url = value(args, &a)?,
            _ => global_or_unknown(args, app, &a)?,
        }
    }
    Ok(opts)
}

fn parse_supervisors(
    args: &mut impl Iterator<Item = String>,
    app: &mut AppOptions,
) -> Result<SupervisorOptions> {
    let mut opts = SupervisorOptions::default();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-o" | "--out" => opts.out = PathBuf::from(value(args, &a)?),
            "--database-url" => opts.database_url = Some(value(args, &a)?),
            "--numbers" => opts.numbers = NumberSource::File(PathBuf::from(value(args, &a)?)),
            "--contact-name" => opts.contact_name = value(args, &a)?,
            _ => global_or_unknown(args, app, &a)?,
        }
    }
    Ok(opts)
}

fn global_or_unknown(
    args: &mut impl Iterator<Item = String>,
    app: &mut AppOptions,
    a: &str,
) -> Result<()> {
    match a {
        "--log-file" => {
            app.log_file = Some(PathBuf::from(value(args, a)?));
            Ok(())
        }
        _ => Err(Error::usage(format!("Unknown arg: {a}"))),
    }
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next()
        .ok_or_else(|| Error::usage(format!("Missing value for {flag}")))
}

pub async fn run(opts: AppOptions) -> Result<()> {
    crate::logging::init(opts.log_file.as_deref())?;

    match opts.command {
        Command::Help => eprintln!("{HELP}"),

        Command::Normalize(n) => {
            let summary = normalize::normalize_file(&n)?;
            println!(
                "Normalized {} districts ({} mandals) into {}",
                summary.districts,
                summary.mandals,
                n.target().display()
            );
        }

        Command::Scrape(mut s) => {
            // directory hints are only acted on once the whole command line parsed
            s.out = resolve_single_out_path(&s.out.to_string_lossy(), DEFAULT_SCRAPE_FILE)?;
            let mut progress = StderrProgress::default();
            let summary = scrape::run(&s, Some(&mut progress)).await?;
            println!("Wrote {}", summary.path.display());
            if !summary.failed.is_empty() {
                eprintln!("Skipped districts: {}", summary.failed.join(", "));
            }
            if !summary.failed_mandals.is_empty() {
                let pairs: Vec<String> = summary
                    .failed_mandals
                    .iter()
                    .map(|(d, m)| format!("{d} / {m}"))
                    .collect();
                eprintln!("Villages missing for: {}", pairs.join(", "));
            }
        }

        Command::Supervisors(mut s) => {
            s.out = resolve_single_out_path(&s.out.to_string_lossy(), DEFAULT_SQL_FILE)?;
            supervisors::run(&s).await?;
            println!("SQL file '{}' generated successfully.", s.out.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<AppOptions> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn no_args_is_help() {
        assert_eq!(parse(&[]).unwrap().command, Command::Help);
        assert_eq!(parse(&["--help"]).unwrap().command, Command::Help);
    }

    #[test]
    fn normalize_defaults_to_in_place() {
        let opts = parse(&["normalize"]).unwrap();
        let Command::Normalize(n) = opts.command else { panic!("not normalize") };
        assert_eq!(n, NormalizeOptions::default());
        assert_eq!(n.target(), n.file);
    }

    #[test]
    fn normalize_flags() {
        let opts = parse(&["--log-file", "x.log", "normalize", "-f", "a.json", "--region", "AP", "-o", "b.json"]).unwrap();
        assert_eq!(opts.log_file, Some(PathBuf::from("x.log")));
        let Command::Normalize(n) = opts.command else { panic!("not normalize") };
        assert_eq!(n.file, PathBuf::from("a.json"));
        assert_eq!(n.region, "AP");
        assert_eq!(n.target(), PathBuf::from("b.json"));
    }

    #[test]
    fn scrape_flags() {
        let opts = parse(&["scrape", "--villages", "--pause-ms", "0", "--district", "Adilabad", "--district", "Nirmal"]).unwrap();
        let Command::Scrape(s) = opts.command else { panic!("not scrape") };
        assert!(s.villages);
        assert_eq!(s.pause_ms, 0);
        assert!(s.wants_district("ADILABAD"));
        assert!(!s.wants_district("Khammam"));
    }

    #[test]
    fn supervisors_flags() {
        let opts = parse(&["supervisors", "--numbers", "n.txt", "--database-url", "postgres://u@h/db"]).unwrap();
        let Command::Supervisors(s) = opts.command else { panic!("not supervisors") };
        assert_eq!(s.numbers, NumberSource::File(PathBuf::from("n.txt")));
        assert_eq!(s.database_url.as_deref(), Some("postgres://u@h/db"));
    }

    #[test]
    fn out_dir_hint_is_not_created_while_parsing() {
        let dir = tempfile::tempdir().unwrap();
        let hint = format!("{}/sql/", dir.path().display());

        let opts = parse(&["supervisors", "-o", &hint]).unwrap();
        let Command::Supervisors(s) = opts.command else { panic!("not supervisors") };
        assert_eq!(s.out, PathBuf::from(&hint));
        assert!(!dir.path().join("sql").exists());

        let scrape_hint = format!("{}/json/", dir.path().display());
        assert!(matches!(parse(&["scrape", "-o", &scrape_hint, "--bogus"]), Err(Error::Usage(_))));
        assert!(!dir.path().join("json").exists());
    }

    #[test]
    fn usage_errors() {
        assert!(matches!(parse(&["frobnicate"]), Err(Error::Usage(_))));
        assert!(matches!(parse(&["normalize", "--region"]), Err(Error::Usage(_))));
        assert!(matches!(parse(&["scrape", "--pause-ms", "soon"]), Err(Error::Usage(_))));
        assert!(matches!(parse(&["supervisors", "--bogus"]), Err(Error::Usage(_))));
    }
}
