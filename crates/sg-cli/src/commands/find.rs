//! Find command implementation

use anyhow::Result;
use sg_db::SkillsDirectory;

use crate::cli::{FindArgs, GlobalArgs};
use crate::commands::common::{connect, load_project};

/// Execute the find command
pub fn execute(args: &FindArgs, global: &GlobalArgs) -> Result<()> {
    let skills: Vec<String> = args
        .skills
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if skills.is_empty() {
        println!("No skills given.");
        return Ok(());
    }

    let project = load_project(global)?;
    let db = connect(&project, global)?;
    let directory = SkillsDirectory::new(&db);

    let volunteers = directory.volunteers_with_skills(&skills)?;
    if volunteers.is_empty() {
        println!("No volunteers found with all the selected skills.");
        return Ok(());
    }

    for volunteer in volunteers {
        println!("- {volunteer}");
    }
    Ok(())
}
