//! Interactive search session.

use clap::Args;
use dialoguer::{Input, Select};
use tokio::sync::Mutex;

use jobboard_core::error::AppError;
use jobboard_service::{JobListing, SearchInputCollector, TermKind};

use super::AppContext;
use crate::output;

/// Arguments for the interactive search
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Number of matching jobs printed after each change
    #[arg(short, long, default_value_t = 10)]
    pub limit: usize,
}

const ACTIONS: [&str; 7] = [
    "Add keyword",
    "Add location",
    "Toggle employment type",
    "Remove a term",
    "Search",
    "Refresh jobs",
    "Quit",
];

/// Run the interactive search loop
pub async fn execute(args: &SearchArgs, ctx: &AppContext) -> Result<(), AppError> {
    let service = ctx.jobs();
    let listing = Mutex::new(JobListing::new());
    let mut collector = SearchInputCollector::new(&ctx.config.search);
    let mut criteria_rx = collector.subscribe();

    if let Err(e) = service.refresh(&listing).await {
        output::print_warning(&format!("{} (choose \"Refresh jobs\" to retry)", e.message));
    }
    print_results(&*listing.lock().await, args.limit);

    loop {
        let action = Select::new()
            .with_prompt("Search")
            .items(&ACTIONS)
            .default(0)
            .interact()
            .map_err(input_error)?;

        match ACTIONS[action] {
            "Add keyword" => {
                let text = prompt_text("Job title or keyword")?;
                collector.set_pending_keyword(text);
                collector.commit_pending_keyword();
            }
            "Add location" => add_location(&mut collector)?,
            "Toggle employment type" => {
                let types = &ctx.config.search.employment_types;
                if types.is_empty() {
                    continue;
                }
                let mut guard = listing.lock().await;
                let labels: Vec<String> = types
                    .iter()
                    .map(|t| {
                        let mark = if guard.employment_types().contains(t) { "x" } else { " " };
                        format!("[{}] {}", mark, t)
                    })
                    .collect();
                let choice = Select::new()
                    .with_prompt("Employment type")
                    .items(&labels)
                    .default(0)
                    .interact()
                    .map_err(input_error)?;
                guard.toggle_employment_type(&types[choice]);
            }
            "Remove a term" => remove_term(&mut collector)?,
            "Search" => {
                collector.search();
            }
            "Refresh jobs" => {
                if let Err(e) = service.refresh(&listing).await {
                    output::print_warning(&e.message);
                }
            }
            _ => break,
        }

        if criteria_rx.has_changed().unwrap_or(false) {
            let criteria = criteria_rx.borrow_and_update().clone();
            listing.lock().await.apply_criteria(&criteria);
        }
        print_results(&*listing.lock().await, args.limit);
    }

    Ok(())
}

fn add_location(collector: &mut SearchInputCollector) -> Result<(), AppError> {
    let text = prompt_text("City")?;
    collector.set_pending_location(text);

    let suggestions: Vec<String> = collector.suggestions().iter().map(|s| s.to_string()).collect();
    let typed = collector.pending_location().trim().to_string();
    if suggestions.is_empty() {
        collector.commit_pending_location();
        return Ok(());
    }

    let mut items = Vec::with_capacity(suggestions.len() + 2);
    if !typed.is_empty() {
        items.push(format!("Use \"{}\"", typed));
    }
    items.extend(suggestions.iter().cloned());
    items.push("Cancel".to_string());

    let choice = Select::new()
        .with_prompt("Suggestions")
        .items(&items)
        .default(0)
        .interact()
        .map_err(input_error)?;

    let offset = usize::from(!typed.is_empty());
    if choice + 1 == items.len() {
        collector.dismiss_suggestions();
    } else if choice < offset {
        collector.commit_pending_location();
    } else {
        collector.select_suggestion(&suggestions[choice - offset]);
    }
    Ok(())
}

fn remove_term(collector: &mut SearchInputCollector) -> Result<(), AppError> {
    let mut terms: Vec<(TermKind, String)> = collector
        .keywords()
        .iter()
        .map(|k| (TermKind::Keyword, k.clone()))
        .collect();
    terms.extend(
        collector
            .locations()
            .iter()
            .map(|l| (TermKind::Location, l.clone())),
    );
    if terms.is_empty() {
        output::print_warning("No terms to remove");
        return Ok(());
    }

    let labels: Vec<String> = terms.iter().map(|(kind, term)| format!("{}: {}", kind, term)).collect();
    let choice = Select::new()
        .with_prompt("Remove")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(input_error)?;

    let (kind, term) = &terms[choice];
    collector.remove(term, *kind);
    Ok(())
}

fn print_results(listing: &JobListing, limit: usize) {
    if let Some(error) = listing.last_error() {
        output::print_warning(error);
    }
    let criteria = listing.criteria();
    println!(
        "\nKeywords: [{}]  Locations: [{}]  Types: [{}]",
        criteria.keywords.as_slice().join(", "),
        criteria.locations.as_slice().join(", "),
        criteria.employment_types.as_slice().join(", ")
    );
    for job in listing.visible().iter().take(limit) {
        println!(
            "  {:<32} {:<20} {:<24} {}",
            job.title,
            job.company_name,
            job.location_label(),
            job.salary_label()
        );
    }
    println!("{}\n", listing.summary());
}

fn prompt_text(prompt: &str) -> Result<String, AppError> {
    Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(input_error)
}

fn input_error(e: dialoguer::Error) -> AppError {
    AppError::internal(format!("Input error: {}", e))
}
