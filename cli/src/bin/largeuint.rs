use anyhow::Result;
use largeuint_cli::LargeUIntCommand;

fn main() -> Result<()> {
  LargeUIntCommand::execute()
}
