use strsam::cli;
use strsam::Error;

fn main() -> Result<(), Error> {
    pretty_env_logger::init();

    let matches = cli::setup_command_line_args().get_matches();
    let out = cli::run(&matches)?;
    println!("{}", out.trim_end());

    Ok(())
}
