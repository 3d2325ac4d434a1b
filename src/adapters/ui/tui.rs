//! Implements InputPort. Inquire-based interactive prompts.
//!
//! Main menu -> category and price prompts -> matches -> optional summary -> optional export.

use crate::adapters::ui::progress;
use crate::domain::{DomainError, FilterCriteria, ProductRecord};
use crate::ports::InputPort;
use crate::shared::AppContext;
use crate::usecases::SummaryService;
use async_trait::async_trait;
use crossterm::style::Stylize;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::{Confirm, CustomType, InquireError, Select};
use tracing::warn;

const MENU_BROWSE: &str = "Browse products";
const MENU_QUIT: &str = "Quit";

const DEFAULT_MIN_PRICE: f64 = 0.0;
const DEFAULT_MAX_PRICE: f64 = 500.0;

/// Neon prompt theme, applied globally.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("?").with_fg(Color::LightMagenta))
        .with_highlighted_option_prefix(Styled::new(">").with_fg(Color::LightCyan))
        .with_answered_prompt_prefix(Styled::new("✔").with_fg(Color::LightCyan));
    inquire::set_global_render_config(config);
}

fn input_error(e: InquireError) -> DomainError {
    DomainError::Input(e.to_string())
}

/// One numbered product entry: name, source price and bulleted reviews.
fn format_product(index: usize, product: &ProductRecord) -> String {
    let mut out = format!("{}. {}\n   Price: {}\n   Reviews:\n", index, product.name, product.price);
    if product.reviews.is_empty() {
        out.push_str("   - (no reviews)\n");
    }
    for review in &product.reviews {
        out.push_str(&format!("   - {}\n", review));
    }
    out
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    ctx: AppContext,
}

impl TuiInputPort {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }

    fn prompt_price(message: &str, default: f64) -> Result<f64, DomainError> {
        loop {
            let value = CustomType::<f64>::new(message)
                .with_default(default)
                .with_error_message("Please type a number")
                .prompt()
                .map_err(input_error)?;
            if value.is_finite() && value >= 0.0 {
                return Ok(value);
            }
            println!("{}", "Price must be a non-negative number.".yellow());
        }
    }

    /// Category and a price range with min <= max.
    fn prompt_criteria(&self, categories: Vec<String>) -> Result<FilterCriteria, DomainError> {
        let category = Select::new("Choose a product category", categories)
            .prompt()
            .map_err(input_error)?;
        loop {
            let min_price = Self::prompt_price("Min price ($)", DEFAULT_MIN_PRICE)?;
            let max_price = Self::prompt_price("Max price ($)", DEFAULT_MAX_PRICE)?;
            if min_price <= max_price {
                return Ok(FilterCriteria::new(category, min_price, max_price));
            }
            println!("{}", "Min price must not exceed max price.".yellow());
        }
    }

    async fn browse(&self) -> Result<(), DomainError> {
        let categories = self.ctx.catalog.categories();
        if categories.is_empty() {
            println!("{}", "The catalog is empty.".yellow());
            return Ok(());
        }

        let criteria = self.prompt_criteria(categories)?;
        let matches = self.ctx.catalog.filter(&criteria)?;
        if matches.is_empty() {
            println!("{}", "No matching products found.".yellow());
            return Ok(());
        }

        println!();
        for (i, product) in matches.iter().enumerate() {
            print!("{}", format_product(i + 1, product));
        }
        println!();

        let wants_summary = Confirm::new("Generate an AI summary of these reviews?")
            .with_default(true)
            .prompt()
            .map_err(input_error)?;
        if !wants_summary {
            return Ok(());
        }

        let reviews = SummaryService::collect_reviews(&matches);
        let spinner = progress::spinner("Generating summary...");
        let result = self.ctx.summary.summarize(&reviews).await;
        spinner.finish_and_clear();
        let summary = result?;

        println!("{}", "AI Summary & Buying Advice".bold().magenta());
        println!("{}\n", summary);

        let wants_export = Confirm::new("Export this summary as a report?")
            .with_default(false)
            .prompt()
            .map_err(input_error)?;
        if wants_export {
            let path = self
                .ctx
                .reports
                .export(
                    &criteria.category,
                    criteria.min_price,
                    criteria.max_price,
                    &summary,
                )
                .await?;
            println!("{} {}", "Report saved as:".green(), path.display());
        }
        Ok(())
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let choice = match Select::new("What would you like to do?", vec![MENU_BROWSE, MENU_QUIT])
                .prompt()
            {
                Ok(choice) => choice,
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                    return Ok(());
                }
                Err(e) => return Err(input_error(e)),
            };

            if choice == MENU_QUIT {
                return Ok(());
            }

            if let Err(e) = self.browse().await {
                warn!(stage = e.stage(), error = %e, "action failed");
                println!("{} {}", format!("✖ {} failed:", e.stage()).red(), e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_product() {
        let product = ProductRecord {
            name: "Trail Runner".to_string(),
            category: "Shoes".to_string(),
            price: "$50".to_string(),
            reviews: vec!["great grip".to_string(), "runs small".to_string()],
        };
        assert_eq!(
            format_product(1, &product),
            "1. Trail Runner\n   Price: $50\n   Reviews:\n   - great grip\n   - runs small\n"
        );
    }

    #[test]
    fn test_format_product_without_reviews() {
        let product = ProductRecord {
            name: "Plain Cap".to_string(),
            category: "Hats".to_string(),
            price: "$9".to_string(),
            reviews: vec![],
        };
        assert!(format_product(2, &product).contains("(no reviews)"));
    }
}
