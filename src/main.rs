#![allow(dangerous_implicit_autorefs)]

#[macro_use]
extern crate log;

use std::env::current_dir;
use std::error::Error;
use std::fs::{self, create_dir_all, File};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::exit;

use clap::{crate_authors, crate_description, crate_version, App, Arg, ArgMatches, SubCommand};

use signsheet::document::configuration::{find_config, Config, CONFIG_FILE, DEFAULT_TITLE};
use signsheet::document::DocumentDefinition;
use signsheet::pipeline::Pipeline;
use signsheet::signs::Directory;
use signsheet::warning::Warnings;
use signsheet::Error as SError;

macro_rules! unwrap {
    ($e: expr, $error: expr) => {
        match $e {
            Some(e) => e,
            None => return Err(Box::new($error)),
        }
    };
}

/// The script written by `signsheet init`.
const SAMPLE_SCRIPT: &str = "\
# Every line of this file becomes a page.
# The sign of a word is read from images/<word>.png.
red big dog
the cats sleep.
";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        error!("{}", e);
        exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let matches = App::new("signsheet")
        .version(crate_version!())
        .author(crate_authors!("\n"))
        .about(crate_description!())
        .subcommand(
            SubCommand::with_name("init")
                .about("Creates a new default signsheet project")
                .arg(Arg::with_name("TITLE").required(false)),
        )
        .subcommand(
            SubCommand::with_name("build")
                .about("Builds the pdf of a script")
                .arg(
                    Arg::with_name("input")
                        .short("i")
                        .long("input")
                        .takes_value(true)
                        .help("The script to read, standard input if absent"),
                )
                .arg(
                    Arg::with_name("output")
                        .short("o")
                        .long("output")
                        .takes_value(true)
                        .help("The pdf to write, standard output if absent"),
                ),
        )
        .get_matches();

    if let Some(init) = matches.subcommand_matches("init") {
        run_init(init)?;
    } else if let Some(build) = matches.subcommand_matches("build") {
        run_build(build)?;
    } else {
        println!("{}", matches.usage());
    }

    Ok(())
}

fn run_init(init: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let mut current_dir = PathBuf::from(unwrap!(current_dir().ok(), SError::CannotReadCurrentDir));
    let current_dir_name = current_dir.clone();
    let current_dir_name = unwrap!(current_dir_name.file_name(), SError::CannotReadCurrentDir);
    let current_dir_name = unwrap!(current_dir_name.to_str(), SError::CannotReadCurrentDir);

    // Initialize the project
    let title = match init.value_of("TITLE") {
        // If a title was given, we will create a directory for the project
        Some(title) => {
            current_dir.push(title);
            title
        }

        // If no title was given, use current_dir_name
        None => current_dir_name,
    };

    create_dir_all(current_dir.join("images"))?;
    create_dir_all(current_dir.join("fonts"))?;

    // Create the default config and save it
    let config = Config::with_title(title);
    let toml = toml::to_string(&config)?;

    current_dir.push(CONFIG_FILE);
    let mut file = File::create(&current_dir)?;
    file.write_all(toml.as_bytes())?;

    // Write a sample script
    current_dir.pop();
    current_dir.push("script.txt");

    let mut file = File::create(&current_dir)?;
    file.write_all(SAMPLE_SCRIPT.as_bytes())?;

    current_dir.pop();
    info!("created project \"{}\" in {}", title, current_dir.display());
    info!("put the signs in images/ and the font at {}", config.font);

    Ok(())
}

fn run_build(build: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let current_dir = unwrap!(current_dir().ok(), SError::CannotReadCurrentDir);

    // Look up for signsheet config file
    let (config, root) = match find_config(&current_dir) {
        Some(path) => {
            info!("using {}", path.display());
            let config = Config::from_file(&path)?;
            let root = path
                .parent()
                .map(PathBuf::from)
                .unwrap_or_else(|| current_dir.clone());
            (config, root)
        }
        None => {
            info!("no {} found, using the default configuration", CONFIG_FILE);
            let title = current_dir
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(DEFAULT_TITLE)
                .to_owned();
            (Config::with_title(&title), current_dir.clone())
        }
    };

    // Read the script
    let (name, content) = match build.value_of("input") {
        Some(path) => (path.to_owned(), fs::read_to_string(path)?),
        None => {
            let mut content = String::new();
            io::stdin().read_to_string(&mut content)?;
            (String::from("<stdin>"), content)
        }
    };

    let store = Directory::new(&root);
    let pipeline = Pipeline::new(&store, config.row_width, config.caption_padding)?;
    let output = pipeline.run(&content);

    if !output.warnings.is_empty() {
        warn!("{} words have no sign", output.warnings.len());
        eprint!(
            "{}",
            Warnings {
                name: &name,
                content: &content,
                warnings: &output.warnings,
            }
        );
    }

    let definition = DocumentDefinition {
        fonts: config.fonts(&root)?,
        content: output.blocks,
    };

    let bytes = config.init(&root).render(&definition)?;

    match build.value_of("output") {
        Some(path) => {
            let mut file = File::create(path)?;
            file.write_all(&bytes)?;
            info!("wrote {}", path);
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(&bytes)?;
            handle.flush()?;
        }
    }

    Ok(())
}
