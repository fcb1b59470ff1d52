use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_pseudo_prints_each_argument() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(
        test.command()
            .args(["pseudo", "Hello %(name)", "Total: %(count) items"])
    );

    Ok(())
}
