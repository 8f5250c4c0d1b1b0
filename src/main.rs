use tonutils_nft::cli::Cli;
use tonutils_nft::utils::init_logger;


#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger()?;
    let cli = Cli::parse_args();
    cli.execute().await?;
    Ok(())
}
