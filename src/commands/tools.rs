use super::Context;
use anyhow::Result;

/// Report the availability of every mkvtoolnix program.
pub fn check_tools(ctx: &Context) -> Result<()> {
    println!("Checking external tools...\n");

    let tools = mkvtool_av::check_tools(&ctx.config.tools.overrides());
    let mut all_ok = true;

    for tool in &tools {
        let status = if tool.available {
            "✓"
        } else {
            all_ok = false;
            "✗"
        };

        print!("{} {}", status, tool.name);

        if let Some(ref version) = tool.version {
            print!(" ({})", version);
        }

        if let Some(ref path) = tool.path {
            print!(" - {}", path.display());
        }

        println!();
    }

    println!();
    if all_ok {
        println!("All required tools are available!");
    } else {
        println!("Some tools are missing. Install mkvtoolnix to enable all commands.");
    }

    Ok(())
}
