use color_eyre::owo_colors::OwoColorize;
use quizdump_lib::cli::{parse_args, resolve_command, run_dump};

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = parse_args();
    let params = resolve_command(args.command)?;

    run_dump(params).await?;

    println!("{}", "Done.".green());
    Ok(())
}
