use anyhow::Result;
use herd::cli::{actions, start};

// Main function
#[tokio::main]
async fn main() -> Result<()> {
    // Start the program
    let (action, globals) = start()?;

    // Handle the action
    let report = actions::session::handle(action, &globals).await?;
    print!("{report}");

    Ok(())
}
