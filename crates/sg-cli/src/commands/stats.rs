//! Stats command implementation

use anyhow::Result;
use sg_db::SkillsDirectory;

use crate::cli::{GlobalArgs, StatsArgs};
use crate::commands::common::{connect, load_project};

/// Execute the stats command
pub fn execute(args: &StatsArgs, global: &GlobalArgs) -> Result<()> {
    let project = load_project(global)?;
    let db = connect(&project, global)?;
    let directory = SkillsDirectory::new(&db);

    println!("Volunteers:          {}", directory.count_volunteers()?);
    println!("Skills (possible):   {}", directory.count_skills_possible()?);
    println!("Skills (available):  {}", directory.count_skills_available()?);

    if args.charts {
        println!("\nSkills per volunteer:");
        for (volunteer, count) in directory.skills_per_volunteer()? {
            println!("  {volunteer}: {count}");
        }

        println!("\nVolunteers per skill:");
        for (skill, count) in directory.volunteers_per_skill()? {
            println!("  {skill}: {count}");
        }
    }

    Ok(())
}
