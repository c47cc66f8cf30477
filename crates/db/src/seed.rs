//! Default storefront content.
//!
//! Each table is seeded only while it is empty, so operator edits are never
//! overwritten and repeated startups are idempotent.

use serde_json::json;
use sqlx::PgPool;

use crate::models::product::CreateProduct;
use crate::models::testimonial::CreateTestimonial;
use crate::repositories::{PageSectionRepo, ProductRepo, TestimonialRepo};

/// What [`seed_default_content`] inserted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub products: usize,
    pub testimonials: usize,
    pub page_sections: usize,
}

/// Seed products, testimonials and page sections into whichever of those
/// tables are empty.
pub async fn seed_default_content(pool: &PgPool) -> Result<SeedReport, sqlx::Error> {
    let mut report = SeedReport::default();

    if ProductRepo::count(pool).await? == 0 {
        for product in default_products() {
            ProductRepo::create(pool, &product).await?;
            report.products += 1;
        }
        tracing::info!(count = report.products, "Default products seeded");
    }

    if TestimonialRepo::count(pool).await? == 0 {
        for testimonial in default_testimonials() {
            TestimonialRepo::create(pool, &testimonial).await?;
            report.testimonials += 1;
        }
        tracing::info!(count = report.testimonials, "Default testimonials seeded");
    }

    if PageSectionRepo::count(pool).await? == 0 {
        for (page, key, content) in default_page_sections() {
            PageSectionRepo::upsert(pool, page, key, &content).await?;
            report.page_sections += 1;
        }
        tracing::info!(count = report.page_sections, "Default page sections seeded");
    }

    Ok(report)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn product(
    slug: &str,
    name: &str,
    category: &str,
    description: &str,
    benefits: &[&str],
    ingredients: &[&str],
    scents: Option<&[&str]>,
    image_url: &str,
    best_seller: bool,
    sort_order: i32,
) -> CreateProduct {
    CreateProduct {
        slug: slug.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        benefits: strings(benefits),
        ingredients: strings(ingredients),
        image_url: image_url.to_string(),
        scents: scents.map(strings),
        best_seller,
        sort_order,
    }
}

/// The launch catalog.
pub fn default_products() -> Vec<CreateProduct> {
    vec![
        product(
            "deodorant-spray",
            "Deodorant Spray",
            "Deodorant",
            "Natural alum deodorant designed to control odor and sweat effectively while being gentle on your skin.",
            &["Natural alum protection", "Controls odor and sweat", "Brightens underarms", "Non-sticky and fast drying"],
            &["Natural Alum", "Purified Water", "Fragrance"],
            Some(&["Vanilla", "Jasmine", "Bubblegum", "Baby Fresh", "Sakura"][..]),
            "https://picsum.photos/seed/deo/600/800",
            true,
            1,
        ),
        product(
            "green-apple-serum",
            "Green Apple Serum",
            "Serum",
            "A potent brightening serum that helps reduce acne and scars with the power of botanical extracts.",
            &["Intense brightening", "Fades acne scars", "Improves skin texture", "Antioxidant protection"],
            &["Apple Extract", "Niacinamide", "Ceramide", "Vitamin C"],
            None,
            "https://picsum.photos/seed/serum/600/800",
            true,
            2,
        ),
        product(
            "honey-moisturizer",
            "Honey Moisturizer",
            "Moisturizer",
            "Deeply hydrating moisturizer that calms redness and provides long-lasting moisture.",
            &["Deep hydration", "Soothes redness", "Repair skin barrier", "Dewy finish"],
            &["Honey", "Centella Asiatica", "Chamomile", "Squalane"],
            None,
            "https://picsum.photos/seed/honey/600/800",
            true,
            3,
        ),
        product(
            "calendula-facial-wash",
            "Calendula Facial Wash",
            "Cleanser",
            "A gentle cleanser that removes impurities without stripping your skin of its natural oils.",
            &["Gentle cleansing", "Calms inflammation", "Keeps skin supple", "Safe for sensitive skin"],
            &["Calendula", "Jojoba Oil", "Niacinamide", "Aloe Vera"],
            None,
            "https://picsum.photos/seed/wash/600/800",
            false,
            4,
        ),
        product(
            "gotu-kola-toner",
            "Gotu Kola Toner",
            "Toner",
            "Hydrating and calming toner that balances skin pH and prepares skin for further treatment.",
            &["Hydrating", "Calming effect", "Balances pH", "Reduces redness"],
            &["Centella Asiatica (Gotu Kola)", "Cucumber Extract", "Hyaluronic Acid"],
            None,
            "https://picsum.photos/seed/toner/600/800",
            false,
            5,
        ),
    ]
}

/// Launch testimonials, in display order.
pub fn default_testimonials() -> Vec<CreateTestimonial> {
    [
        (
            "Sarah K.",
            "The Deodorant Spray is a game changer! No more sticky feeling and it smells amazing.",
            "Loyal Customer",
        ),
        (
            "Aditya R.",
            "My acne scars started fading in just two weeks with the Green Apple Serum. Highly recommend!",
            "Student",
        ),
        (
            "Maya S.",
            "Finally found a moisturizer that doesn't break me out. The Honey Moisturizer is magic.",
            "Working Professional",
        ),
    ]
    .into_iter()
    .map(|(name, text, role)| CreateTestimonial {
        name: name.to_string(),
        text: text.to_string(),
        role: role.to_string(),
    })
    .collect()
}

/// Default copy for every page section the storefront renders.
pub fn default_page_sections() -> Vec<(&'static str, &'static str, serde_json::Value)> {
    vec![
        (
            "home",
            "hero",
            json!({
                "badge": "Est. 2020 • Indonesia",
                "title_line1": "Naturally",
                "title_line2": "Yours —",
                "title_line3": "Everyday Glow.",
                "subtitle": "Natural ingredients. Skin-friendly formulas. Designed for daily care.",
                "image": "https://images.unsplash.com/photo-1556228578-0d85b1a4d571?q=80&w=1200&auto=format&fit=crop",
                "badge_text": "100% BPOM Certified Safe"
            }),
        ),
        (
            "home",
            "ticker",
            json!({ "items": ["Alcohol Free", "Natural Ingredients", "Indonesian Made"] }),
        ),
        (
            "home",
            "bestsellers",
            json!({
                "title_line1": "Our",
                "title_line2": "Favorites",
                "subtitle": "The essentials your skin has been waiting for."
            }),
        ),
        (
            "home",
            "why",
            json!({
                "title_line1": "Why",
                "title_line2": "Jennskin?",
                "image": "https://images.unsplash.com/photo-1596462502278-27bfdc4033c8?q=80&w=800&auto=format&fit=crop",
                "features": [
                    { "id": "01", "title": "Clean Formulas", "desc": "No alcohol, no parabens. Only the essentials your skin needs." },
                    { "id": "02", "title": "Tropical Science", "desc": "Designed specifically for the Indonesian climate and humidity." },
                    { "id": "03", "title": "Safe for Daily Use", "desc": "Gentle enough to be your morning and evening ritual foundation." }
                ]
            }),
        ),
        (
            "home",
            "cta",
            json!({
                "title_line1": "Ready",
                "title_line2": "To Glow?",
                "subtitle": "Join the natural skincare revolution. High quality, Indonesian made, BPOM certified."
            }),
        ),
        (
            "about",
            "intro",
            json!({
                "badge": "Our DNA",
                "title_line1": "True",
                "title_line2": "Natural",
                "title_line3": "Heritage.",
                "paragraph1": "Jennskin Naturals was founded in 2020 by Jennifer Coppen with a clear vision: to bring high-performance natural skincare to the modern Indonesian woman.",
                "paragraph2": "We believe that beauty should never come at the cost of your health. That's why every drop is free from alcohol, parabens, and harsh synthetics.",
                "image": "https://images.unsplash.com/photo-1570172619992-23136208665c?q=80&w=1200&auto=format&fit=crop",
                "quote": "\"We don't follow trends; we nurture real skin.\""
            }),
        ),
        (
            "about",
            "philosophy",
            json!({
                "items": [
                    { "title": "Source", "desc": "Ethically harvested Indonesian botanicals." },
                    { "title": "Science", "desc": "BPOM certified safe and gentle formulas." },
                    { "title": "Soul", "desc": "Designed for confidence and self-care daily." }
                ]
            }),
        ),
        (
            "contact",
            "header",
            json!({ "title_line1": "Let's", "title_line2": "Chat." }),
        ),
        (
            "contact",
            "booth",
            json!({
                "title": "Visit Our Booth",
                "line1": "Living World Mall",
                "line2": "(In front of MM Juice)",
                "line3": "Denpasar, Bali"
            }),
        ),
        (
            "products",
            "header",
            json!({
                "badge": "Boutique",
                "title": "The Collection",
                "subtitle": "High-performance natural skincare crafted for the modern soul."
            }),
        ),
    ]
}
