//! `personas show company|persona <id>`.

use anyhow::Result;
use console::style;

use personas_types::timestamp;

use crate::state::AppState;

pub async fn show_company(state: &AppState, id: &str, json: bool) -> Result<()> {
    let company = state.company_service.get_company(id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&company)?);
        return Ok(());
    }

    println!();
    println!("  {}", style(&company.name).cyan().bold());
    println!("  {}", style(&company.description).dim());
    println!();
    println!("  {}", style("── Details ──").dim());
    println!("  {}    {}", style("Industry:").bold(), company.industry);
    if !company.characteristics.is_empty() {
        println!(
            "  {}      {}",
            style("Traits:").bold(),
            company.characteristics.join(", ")
        );
    }
    println!(
        "  {}     {}",
        style("Created:").bold(),
        timestamp::format(&company.created_at)
    );
    println!(
        "  {}          {}",
        style("ID:").bold(),
        style(company.id.to_string()).dim()
    );
    println!();

    Ok(())
}

pub async fn show_persona(state: &AppState, id: &str, json: bool) -> Result<()> {
    let persona = state.persona_service.get_persona(id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&persona)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} {}",
        style(&persona.name).cyan().bold(),
        style(format!("({}, {})", persona.age, persona.gender)).dim()
    );
    println!("  {} in {}", persona.job_title, persona.location);
    println!();
    println!("  {}", style("── Profile ──").dim());
    println!("  {}   {}", style("Interests:").bold(), persona.interests.join(", "));
    println!("  {}  {}", style("Challenges:").bold(), persona.challenges.join(", "));
    println!("  {}      {}", style("Avatar:").bold(), persona.avatar);
    println!(
        "  {}     {}",
        style("Company:").bold(),
        style(&persona.company_id).dim()
    );
    println!(
        "  {}          {}",
        style("ID:").bold(),
        style(persona.id.to_string()).dim()
    );
    println!();

    Ok(())
}
