use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use rental_listings::auth::{DemoAuthenticator, Session, SignInForm, SignUpForm, SubmitError};
use rental_listings::config::{Config, DataSource};
use rental_listings::display::{listing_card, property_detail};
use rental_listings::filters::{BedroomBucket, PriceBucket, PropertyTypeFilter, SortKey};
use rental_listings::sources::{FixtureSource, HttpSource, JsonFileSource, PropertySource};
use rental_listings::{ListingView, PropertyRecord};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rental-listings", version, about = "Browse rental listings from the command line")]
struct Cli {
    /// JSON file with the listing collection (overrides RENTALS_DATA_PATH)
    #[arg(long, global = true, conflicts_with = "url")]
    data: Option<PathBuf>,

    /// URL serving the listing collection as JSON (overrides RENTALS_DATA_URL)
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search, filter and sort listings
    Search(SearchArgs),
    /// Show the detail page for one listing
    Show {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Submit the sign-in form
    SignIn {
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
        #[arg(long)]
        remember_me: bool,
    },
    /// Submit the sign-up form
    SignUp {
        #[arg(long, default_value = "")]
        first_name: String,
        #[arg(long, default_value = "")]
        last_name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
        #[arg(long, default_value = "")]
        confirm_password: String,
        #[arg(long)]
        accept_terms: bool,
    },
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Text matched against title, location and description
    #[arg(long, default_value = "")]
    search: String,
    /// all, under-2000, 2000-3000, 3000-4000, over-4000
    #[arg(long, default_value = "all")]
    price: String,
    /// all, studio, 1, 2, 3, 4+
    #[arg(long, default_value = "all")]
    bedrooms: String,
    /// all, apartment, house, condo, townhouse, studio, duplex
    #[arg(long = "type", default_value = "all")]
    property_type: String,
    /// newest, price-low, price-high, rating (defaults to RENTALS_DEFAULT_SORT)
    #[arg(long)]
    sort: Option<String>,
    /// Mark listings as saved
    #[arg(long = "save")]
    saved: Vec<String>,
    /// Print results as JSON
    #[arg(long)]
    json: bool,
    /// Also write the results to this JSON file
    #[arg(long)]
    output: Option<PathBuf>,
}

fn source_for(config: &Config) -> anyhow::Result<Box<dyn PropertySource>> {
    Ok(match &config.data_source {
        DataSource::Fixture => Box::new(FixtureSource::new()),
        DataSource::File(path) => Box::new(JsonFileSource::new(path.clone())),
        DataSource::Url(url) => Box::new(
            HttpSource::with_timeout(url.clone(), config.http_timeout)
                .context("Failed to create HTTP client")?,
        ),
    })
}

async fn load_listings(config: &Config) -> anyhow::Result<Vec<PropertyRecord>> {
    let source = source_for(config)?;
    let listings = source
        .load()
        .await
        .with_context(|| format!("Failed to load listings from {}", source.source_name()))?;
    info!("Loaded {} listings from {}", listings.len(), source.source_name());
    Ok(listings)
}

async fn run_search(config: &Config, args: SearchArgs) -> anyhow::Result<()> {
    let listings = load_listings(config).await?;
    let mut view = ListingView::new(&listings);

    view.set_search(args.search);
    view.set_price_bucket(PriceBucket::parse(&args.price));
    view.set_bedroom_bucket(BedroomBucket::parse(&args.bedrooms));
    view.set_property_type(PropertyTypeFilter::parse(&args.property_type));
    view.set_sort(
        args.sort
            .as_deref()
            .map(SortKey::parse)
            .unwrap_or(config.default_sort),
    );
    for id in &args.saved {
        if !view.toggle_saved(id) {
            warn!("No listing with id {} to save", id);
        }
    }
    view.refresh();

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(view.visible())?;
        tokio::fs::write(path, json)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("💾 Saved {} listings to {}", view.visible().len(), path.display());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(view.visible())?);
        return Ok(());
    }

    println!("{}\n", view.summary());
    for (i, listing) in view.visible().iter().enumerate() {
        println!("{}", listing_card(i + 1, listing, view.is_saved(&listing.id)));
        println!();
    }
    if view.visible().is_empty() {
        println!("No properties match your filters.");
    }

    Ok(())
}

async fn run_show(config: &Config, id: &str, json: bool) -> anyhow::Result<()> {
    let listings = load_listings(config).await?;
    let view = ListingView::new(&listings);

    let Some(listing) = view.find(id) else {
        bail!("Property {id} not found");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(listing)?);
    } else {
        println!("{}", property_detail(listing));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormAction {
    SignIn,
    SignUp,
}

impl FormAction {
    fn success_message(&self, redirect: &str) -> String {
        match self {
            FormAction::SignIn => format!("✅ Signed in. Redirecting to {redirect}"),
            FormAction::SignUp => format!("✅ Account created. Redirecting to {redirect}"),
        }
    }
}

fn report_submit(action: FormAction, result: Result<String, SubmitError>) -> anyhow::Result<()> {
    match result {
        Ok(redirect) => {
            println!("{}", action.success_message(&redirect));
            Ok(())
        }
        Err(SubmitError::Invalid(errors)) => {
            for (field, message) in errors.iter() {
                println!("  {field}: {message}");
            }
            bail!("Form has {} invalid field(s)", errors.len())
        }
        Err(err) => Err(err.into()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config =
        Config::from_env_with_source(cli.data, cli.url).context("Invalid configuration")?;

    match cli.command {
        Command::Search(args) => run_search(&config, args).await,
        Command::Show { id, json } => run_show(&config, &id, json).await,
        Command::SignIn {
            email,
            password,
            remember_me,
        } => {
            let form = SignInForm {
                email,
                password,
                remember_me,
            };
            let mut session = Session::new();
            report_submit(FormAction::SignIn, session.submit_sign_in(&form, &DemoAuthenticator).await)
        }
        Command::SignUp {
            first_name,
            last_name,
            email,
            password,
            confirm_password,
            accept_terms,
        } => {
            let form = SignUpForm {
                first_name,
                last_name,
                email,
                password,
                confirm_password,
                accept_terms,
            };
            let mut session = Session::new();
            report_submit(FormAction::SignUp, session.submit_sign_up(&form, &DemoAuthenticator).await)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_message_names_the_submitted_form() {
        assert_eq!(
            FormAction::SignIn.success_message("/properties"),
            "✅ Signed in. Redirecting to /properties"
        );
        assert_eq!(
            FormAction::SignUp.success_message("/"),
            "✅ Account created. Redirecting to /"
        );
    }

    #[test]
    fn cli_data_flag_is_accepted_after_the_subcommand() {
        let cli = Cli::try_parse_from(["rental-listings", "show", "3", "--data", "cli.json"]).unwrap();
        assert_eq!(cli.data, Some(PathBuf::from("cli.json")));
        assert!(cli.url.is_none());
    }
}
