use anyhow::Context;

use techstore_catalog::{Catalog, ProductId};
use techstore_storefront::{NoopCheckout, StorefrontConfig, StorefrontSession, render};

fn main() -> anyhow::Result<()> {
    let (config, warnings) = StorefrontConfig::from_env();
    techstore_observability::init(config.log_format);
    for warning in &warnings {
        tracing::warn!(key = warning.key, value = %warning.value, "{}", warning.reason);
    }

    let catalog = Catalog::techstore().context("built-in catalog is invalid")?;
    let mut session = StorefrontSession::new(catalog);
    session.select_category(&config.initial_category);

    tracing::info!(
        store = %config.store_name,
        session_id = %session.session_id(),
        category = %session.selected_category(),
        "storefront session started"
    );

    println!("== {} ==", config.store_name);
    println!("{}", render::render_catalog(&session, &config));

    // Scripted shopper: two phones, a watch bumped to two, headphones dropped.
    session.add_product(ProductId::new(1));
    session.add_product(ProductId::new(1));
    session.add_product(ProductId::new(2));
    session.add_product(ProductId::new(3));
    session.increment(ProductId::new(3));
    session.remove_product(ProductId::new(2));

    println!("{}", render::render_cart(&session, &config));
    println!("{}", session.snapshot_json().context("serializing cart snapshot")?);
    println!("{}", render::render_info(&config));

    let receipt = session.checkout(&NoopCheckout)?;
    tracing::info!(reference = %receipt.reference, total = %receipt.total, "order draft acknowledged");

    Ok(())
}
