pub mod args;
mod setup;

pub use args::AppArgs;

use anyhow::Result;

pub async fn launch() -> Result<()> {
    launch_with_args(AppArgs::from_cli()).await
}

pub async fn launch_with_args(args: AppArgs) -> Result<()> {
    let setup::PreparedApp {
        args,
        profile,
        timing,
        session,
    } = setup::prepare(args)?;

    if args.print_config {
        println!("{}", serde_json::to_string_pretty(profile.as_ref())?);
        return Ok(());
    }

    crate::ui::run_tui(session, timing).await
}
