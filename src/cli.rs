use crate::{Options, RepairLogEntry, UnterminatedPolicy, repair_file, repair_to_string_with_log};
use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

fn print_help(program: &str) {
    eprintln!(
        "Usage: {prog} [OPTIONS] [INPUT]\n\
         \n\
         Repairs truncated error-handler call sites left behind by a broken\n\
         codemod, folding the duplicated closing brace each one leaves.\n\
         \n\
         INPUT: optional input file. When omitted, reads from stdin.\n\
         \n\
         Options:\n\
           -o, --output FILE          Write output to FILE (default stdout)\n\
               --in-place             Overwrite INPUT file\n\
               --callee NAME          Broken call's function name\n\
                                      (default handleControllerError)\n\
               --prefix LABEL         Label prefix for replacements\n\
                                      (default Controller)\n\
               --on-unterminated P    error|truncate|keep (default error)\n\
               --verbose              Progress notices on stderr\n\
               --log                  Repair log as JSON lines on stderr\n\
           -h, --help                 Show this help\n",
        prog = program
    );
}

struct CliMode {
    input: Option<String>,
    output: Option<String>,
    in_place: bool,
    verbose: bool,
    log_json: bool,
}

fn parse_args() -> (Options, CliMode) {
    let mut args: Vec<String> = env::args().collect();
    let program = args
        .first()
        .cloned()
        .unwrap_or_else(|| "handlerfix".to_string());
    args.remove(0);

    let mut opts = Options::default();
    let mut input: Option<String> = None;
    let mut output: Option<String> = None;
    let mut in_place = false;
    let mut verbose = false;
    let mut log_json = false;

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
                output = Some(args[i].clone());
            }
            "--in-place" => {
                in_place = true;
            }
            "--callee" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing NAME for --callee");
                    std::process::exit(2);
                }
                opts.callee = args[i].clone();
            }
            "--prefix" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing LABEL for --prefix");
                    std::process::exit(2);
                }
                opts.label_prefix = args[i].clone();
            }
            "--on-unterminated" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing POLICY for --on-unterminated");
                    std::process::exit(2);
                }
                match args[i].to_lowercase().as_str() {
                    "error" => opts.unterminated = UnterminatedPolicy::Error,
                    "truncate" => opts.unterminated = UnterminatedPolicy::Truncate,
                    "keep" => opts.unterminated = UnterminatedPolicy::Keep,
                    other => {
                        eprintln!("Unknown unterminated policy: {}", other);
                        std::process::exit(2);
                    }
                }
            }
            "--verbose" => {
                verbose = true;
            }
            "--log" => {
                log_json = true;
            }
            s if s.starts_with('-') => {
                eprintln!("Unknown option: {}", s);
                std::process::exit(2);
            }
            path => {
                input = Some(path.to_string());
            }
        }
        i += 1;
    }

    opts.logging = verbose || log_json;

    let mode = CliMode {
        input,
        output,
        in_place,
        verbose,
        log_json,
    };
    (opts, mode)
}

fn report(log: &[RepairLogEntry], repaired: usize, mode: &CliMode) {
    if mode.verbose {
        for e in log {
            if e.detail.is_empty() {
                eprintln!("line {}: {}", e.line, e.message);
            } else {
                eprintln!("line {}: {}: {}", e.line, e.message, e.detail);
            }
        }
        eprintln!("repaired {} call site(s)", repaired);
    }
    if mode.log_json {
        #[cfg(feature = "serde")]
        for e in log {
            if let Ok(s) = serde_json::to_string(e) {
                eprintln!("{}", s);
            }
        }
        #[cfg(not(feature = "serde"))]
        for e in log {
            eprintln!("{{\"line\":{},\"message\":\"{}\"}}", e.line, e.message);
        }
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (opts, mode) = parse_args();

    if mode.in_place {
        let inp = mode.input.as_ref().ok_or("--in-place requires INPUT file")?;
        let summary = repair_file(Path::new(inp), &opts)?;
        report(&summary.log, summary.repaired, &mode);
        return Ok(());
    }

    let content = match &mode.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let (fixed, log) = repair_to_string_with_log(&content, &opts)?;
    let repaired = log.iter().filter(|e| e.message == "repaired call site").count();
    report(&log, repaired, &mode);

    match &mode.output {
        Some(path) => fs::write(path, fixed)?,
        None => io::stdout().write_all(fixed.as_bytes())?,
    }
    Ok(())
}
