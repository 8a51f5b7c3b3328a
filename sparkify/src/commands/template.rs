// sparkify/src/commands/template.rs

use sparkify_core::domain::load::InsertTemplate;
use tracing::debug;

pub fn execute(name: Option<String>) -> miette::Result<()> {
    match name {
        Some(name) => {
            let template: InsertTemplate = name.parse()?;
            debug!(
                template = template.as_str(),
                target = template.target_table(),
                "Printing insert template"
            );
            println!("{}", template.sql());
        }
        None => {
            for template in InsertTemplate::ALL {
                println!(
                    "{:<10} -> {} ({:?})",
                    template.as_str(),
                    template.target_table(),
                    template.default_mode()
                );
            }
        }
    }
    Ok(())
}
