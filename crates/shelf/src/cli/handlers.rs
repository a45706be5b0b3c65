//! Command handlers for the shelf CLI.
//!
//! Each handler calls exactly one API method and hands the result to `render`.

use super::render;
use super::setup::{AddArgs, Commands};
use super::build_api;
use crate::server;
use anyhow::bail;
use shelfapp::api::ShelfApi;
use shelfapp::config::ShelfConfig;
use shelfapp::model::{split_features, ProductDraft};
use shelfapp::store::fs::FileStore;

pub fn dispatch(command: Commands, config: ShelfConfig) -> anyhow::Result<()> {
    let mut api = build_api(&config);

    match command {
        Commands::List { category, json } => handle_list(&api, category, json),
        Commands::Categories { json } => handle_categories(&api, json),
        Commands::Add(args) => handle_add(&mut api, args),
        Commands::Delete { category, id } => handle_delete(&mut api, &category, id),
        Commands::Doctor => handle_doctor(&api),
        Commands::Init => handle_init(&mut api),
        Commands::Config => {
            print!("{}", ShelfConfig::template());
            Ok(())
        }
        Commands::Serve { bind } => server::run(api, config, bind),
    }
}

fn handle_list(
    api: &ShelfApi<FileStore>,
    category: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    match category {
        Some(category) => {
            let result = api.list_category(&category)?;
            if json {
                render::print_json(&result.listed_products)
            } else {
                render::print_category(&category, &result.listed_products);
                Ok(())
            }
        }
        None => {
            let catalog = api.list_all()?.catalog.unwrap_or_default();
            if json {
                render::print_json(&catalog)
            } else {
                render::print_catalog(&catalog);
                Ok(())
            }
        }
    }
}

fn handle_categories(api: &ShelfApi<FileStore>, json: bool) -> anyhow::Result<()> {
    let result = api.categories()?;
    if json {
        return render::print_json(&result.categories);
    }
    for category in &result.categories {
        println!("{category}");
    }
    Ok(())
}

fn handle_add(api: &mut ShelfApi<FileStore>, args: AddArgs) -> anyhow::Result<()> {
    let result = api.create_product(draft_from_args(args))?;
    render::print_messages(&result.messages);
    for product in &result.affected_products {
        println!("{}", render::format_product_line(product));
    }
    Ok(())
}

fn handle_delete(api: &mut ShelfApi<FileStore>, category: &str, id: u64) -> anyhow::Result<()> {
    let result = api.delete_product(category, id)?;
    if result.affected_products.is_empty() {
        bail!("Product not found: {category}/{id}");
    }
    render::print_messages(&result.messages);
    Ok(())
}

fn handle_doctor(api: &ShelfApi<FileStore>) -> anyhow::Result<()> {
    let result = api.doctor()?;
    render::print_messages(&result.messages);
    if result.has_errors() {
        bail!("catalog has problems");
    }
    Ok(())
}

fn handle_init(api: &mut ShelfApi<FileStore>) -> anyhow::Result<()> {
    let result = api.init()?;
    render::print_messages(&result.messages);
    Ok(())
}

fn draft_from_args(args: AddArgs) -> ProductDraft {
    let features: Vec<String> = args
        .features
        .iter()
        .flat_map(|raw| split_features(raw))
        .collect();

    ProductDraft {
        category: Some(args.category),
        name: Some(args.name),
        affiliate_link: Some(args.affiliate_link),
        original_price: args.original_price,
        sale_price: args.sale_price,
        rating: args.rating,
        reviews: args.reviews,
        image: args.image,
        features: (!features.is_empty()).then_some(features),
        badge: args.badge,
        discount: args.discount,
    }
}
