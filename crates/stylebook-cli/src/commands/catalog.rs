use std::path::Path;

use anyhow::Result;
use stylebook_application::{ComparisonService, ExportFormat, RecommendationService, StyleUseCase};

use super::context::{ContextOptions, open_catalog};
use super::diff::render_comparison;

pub fn compare(styles: &Path, left: &str, right: &str, json: bool) -> Result<()> {
    let service = ComparisonService::new(open_catalog(styles)?);
    let comparison = service.compare(left, right)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
        return Ok(());
    }

    println!(
        "{} ({}) vs {} ({})\n",
        comparison.left.name, comparison.left.id, comparison.right.name, comparison.right.id
    );
    print!("{}", render_comparison(&comparison.tokens, false));
    println!("similarity {:.1}", comparison.similarity.total);
    Ok(())
}

pub fn score(styles: &Path, a: &str, b: &str) -> Result<()> {
    let service = ComparisonService::new(open_catalog(styles)?);
    let similarity = service.compare(a, b)?.similarity;
    println!(
        "{:.1} (color {:.1}, font {:.1}, description {:.1})",
        similarity.total, similarity.color, similarity.font, similarity.description
    );
    Ok(())
}

pub fn recommend(
    options: &ContextOptions,
    styles: &Path,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let config = options.load_config()?;
    let service = RecommendationService::new(
        open_catalog(styles)?,
        options.history(&config)?,
        config.recommendation.limit,
    );
    let recommendations = service.recommend(limit)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&recommendations)?);
        return Ok(());
    }
    for recommendation in recommendations {
        match recommendation.score {
            Some(score) => println!(
                "{:>5.1}  {} ({})",
                score, recommendation.style.name, recommendation.style.id
            ),
            None => println!(
                "    -  {} ({})",
                recommendation.style.name, recommendation.style.id
            ),
        }
    }
    Ok(())
}

pub fn view(options: &ContextOptions, styles: &Path, id: &str) -> Result<()> {
    let config = options.load_config()?;
    let usecase = StyleUseCase::new(open_catalog(styles)?, options.history(&config)?);
    let style = usecase.view_style(id)?;

    println!("{} ({})", style.name, style.id);
    if !style.description.is_empty() {
        println!("{}", style.description);
    }
    if let Some(prompt) = &style.metadata.prompt {
        println!("prompt: {}", prompt);
    }
    println!("{} tokens", style.tokens.leaf_count());
    Ok(())
}

pub fn export(options: &ContextOptions, styles: &Path, id: &str, flattened: bool) -> Result<()> {
    let config = options.load_config()?;
    let usecase = StyleUseCase::new(open_catalog(styles)?, options.history(&config)?);
    let format = if flattened {
        ExportFormat::Flattened
    } else {
        ExportFormat::Tree
    };
    println!("{}", usecase.export_tokens(id, format)?);
    Ok(())
}
