use crate::{repair_with_log, repair_with_options, LeadingZeroPolicy, Options};
use std::env;
use std::fs;
use std::io::{self, BufWriter, Read, Write};

fn print_help(program: &str) {
    eprintln!(
        "Usage: {prog} [OPTIONS] [INPUT]\n\
         \n\
         INPUT: optional input file. When omitted, reads from stdin.\n\
         \n\
         Options:\n\
           -o, --output FILE         Write output to FILE (default stdout)\n\
               --in-place            Overwrite INPUT file\n\
               --pretty              Pretty-print output\n\
               --log                 Print applied repairs to stderr\n\
               --ensure-ascii        Escape non-ASCII as \\uXXXX\n\
               --no-python-keywords  Disable Python True/False/None normalization\n\
               --no-undefined-null   Disable undefined -> null repair\n\
               --no-fence            Disable fenced code block stripping\n\
               --hash-comments       Treat # as a line comment\n\
               --leading-zero POLICY quote|keep (default quote)\n\
           -h, --help                Show this help\n",
        prog = program
    );
}

struct CliMode {
    input: Option<String>,
    output: Option<String>,
    in_place: bool,
    pretty: bool,
    log: bool,
}

fn parse_args() -> (Options, CliMode) {
    let mut args: Vec<String> = env::args().collect();
    let program = args.first().cloned().unwrap_or_else(|| "jsonmend".to_string());
    args.remove(0);

    let mut opts = Options::default();
    let mut mode = CliMode {
        input: None,
        output: None,
        in_place: false,
        pretty: false,
        log: false,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help(&program);
                std::process::exit(0);
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing FILE for --output");
                    std::process::exit(2);
                }
                mode.output = Some(args[i].clone());
            }
            "--in-place" => {
                mode.in_place = true;
            }
            "--pretty" => {
                mode.pretty = true;
            }
            "--log" => {
                mode.log = true;
            }
            "--ensure-ascii" => {
                opts.ensure_ascii = true;
            }
            "--no-python-keywords" => {
                opts.allow_python_keywords = false;
            }
            "--no-undefined-null" => {
                opts.repair_undefined = false;
            }
            "--no-fence" => {
                opts.fenced_code_blocks = false;
            }
            "--hash-comments" => {
                opts.tolerate_hash_comments = true;
            }
            "--leading-zero" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing POLICY for --leading-zero");
                    std::process::exit(2);
                }
                match args[i].to_lowercase().as_str() {
                    "quote" => opts.leading_zero_policy = LeadingZeroPolicy::QuoteAsString,
                    "keep" => opts.leading_zero_policy = LeadingZeroPolicy::KeepAsNumber,
                    other => {
                        eprintln!("Unknown leading-zero policy: {}", other);
                        std::process::exit(2);
                    }
                }
            }
            s if s.starts_with('-') && s.len() > 1 => {
                eprintln!("Unknown option: {}", s);
                std::process::exit(2);
            }
            path => {
                mode.input = Some(path.to_string());
            }
        }
        i += 1;
    }

    (opts, mode)
}

fn render(input: &str, opts: &Options, mode: &CliMode) -> Result<String, Box<dyn std::error::Error>> {
    let repaired = if mode.log {
        let (out, entries) = repair_with_log(input, opts)?;
        for e in &entries {
            eprintln!("{} at position {} near {:?}", e.message, e.position, e.context);
        }
        out
    } else {
        repair_with_options(input, opts)?
    };

    if mode.pretty {
        #[cfg(feature = "serde")]
        {
            let value: serde_json::Value = serde_json::from_str(&repaired)
                .map_err(|e| crate::RepairError::from_serde("parse", e))?;
            return Ok(serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(repaired)
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (opts, mode) = parse_args();

    let content = match &mode.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let out = render(&content, &opts, &mode)?;

    if mode.in_place {
        let path = mode.input.as_ref().ok_or("--in-place requires INPUT file")?;
        fs::write(path, out)?;
        return Ok(());
    }

    match &mode.output {
        Some(path) => {
            let mut writer = BufWriter::new(fs::File::create(path)?);
            writer.write_all(out.as_bytes())?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            writer.write_all(out.as_bytes())?;
            writer.flush()?;
        }
    }

    Ok(())
}
