use clap::Parser;
use color_print::cprintln;

use scan::error::Error;
use scan::{demo, report, scanner};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input files
    #[clap(default_value = "main.mini")]
    input: Vec<String>,

    /// Run the built-in demo programs (optionally a single 1-based index)
    #[clap(short, long, value_name = "N")]
    demo: Option<Option<usize>>,

    /// Print a numbered source listing before each report
    #[clap(short, long)]
    listing: bool,
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        cprintln!("<red,bold>error</>: {}", err);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    match args.demo {
        Some(None) => {
            for (idx, source) in demo::PROGRAMS.iter().enumerate() {
                println!("Demo {}:", idx + 1);
                scan_and_report(source, args.listing);
                println!();
            }
        }
        Some(Some(n)) => {
            let source = demo::PROGRAMS
                .get(n.wrapping_sub(1))
                .ok_or(Error::UnknownDemo(n))?;
            println!("Demo {}:", n);
            scan_and_report(source, args.listing);
        }
        None => {
            for path in &args.input {
                println!("< {}", path);
                let source = std::fs::read_to_string(path)
                    .map_err(|err| Error::FileRead(path.clone(), err))?;
                scan_and_report(&source, args.listing);
                println!();
            }
        }
    }
    Ok(())
}

fn scan_and_report(source: &str, listing: bool) {
    if listing {
        report::print_source(source);
        println!();
    }
    let result = scanner::scan(source);
    report::print_report(&result);
}
