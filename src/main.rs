use clap::{crate_description, crate_name, crate_version, App, Arg, ArgMatches};
use popleague::{
    data::League,
    task::{IntermediateType, ParseErrorPolicy, Task},
};
use std::{
    error::Error,
    fs::File,
    io::{BufReader, BufWriter},
};

fn parse_intermediate_type(intermediate_type: &str) -> IntermediateType {
    match intermediate_type {
        "mem" => IntermediateType::Mem,
        "tmpfile" => IntermediateType::TmpFile,
        _ => unreachable!(),
    }
}

fn handle_rank(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let league = League::from_file(matches.value_of("LEAGUE").unwrap())?;
    let task = Task::new(league)
        .intermediate_type(parse_intermediate_type(
            matches.value_of("intermediate").unwrap(),
        ))
        .parse_error_policy(if matches.is_present("strict") {
            ParseErrorPolicy::Abort
        } else {
            ParseErrorPolicy::Skip
        });
    let edges = BufReader::new(File::open(matches.value_of("EDGES").unwrap())?);
    if let Some(path) = matches.value_of("OUTPUT") {
        task.execute(edges, &mut BufWriter::new(File::create(path)?))?;
    } else {
        let stdout = std::io::stdout();
        task.execute(edges, &mut stdout.lock())?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let matches = App::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .arg(
            Arg::with_name("EDGES")
                .help("Link graph file, one \"<source>: <target> ...\" record per line")
                .required(true),
        )
        .arg(
            Arg::with_name("LEAGUE")
                .help("League-membership file, one page id per line")
                .required(true),
        )
        .arg(Arg::with_name("OUTPUT").help("Output file [default: stdout]"))
        .arg(
            Arg::with_name("intermediate")
                .long("intermediate")
                .takes_value(true)
                .possible_values(&["mem", "tmpfile"])
                .default_value("tmpfile")
                .help("Where the stage A -> stage B dataset lives"),
        )
        .arg(
            Arg::with_name("strict")
                .long("strict")
                .help("Abort on the first malformed record instead of skipping it"),
        )
        .get_matches();
    handle_rank(&matches)
}
