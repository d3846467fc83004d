use std::env;

use anyhow::{Context, bail};
use example_surveys::{UserProfile, order_summary, sandwich};
use survey::{Answers, ask};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let which = env::args().nth(1).unwrap_or_else(|| "profile".to_string());
    tracing::debug!(survey = %which, "starting");

    match which.as_str() {
        "profile" => {
            let mut profile = UserProfile::default();
            ask(&mut UserProfile::questions(), &mut profile, [])
                .context("profile survey failed")?;
            println!("{profile:#?}");
        }
        "sandwich" => {
            let mut answers = Answers::new();
            ask(&mut sandwich::questions(), &mut answers, [])
                .context("sandwich survey failed")?;
            println!("{}", order_summary(&answers)?);
        }
        other => bail!("unknown survey '{other}', expected 'profile' or 'sandwich'"),
    }

    Ok(())
}
