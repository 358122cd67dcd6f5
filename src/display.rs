use crate::models::PropertyRecord;

fn bedrooms_label(record: &PropertyRecord) -> String {
    if record.is_studio() {
        return "Studio".to_string();
    }
    match record.bedrooms {
        1 => "1 bed".to_string(),
        n => format!("{n} beds"),
    }
}

fn bathrooms_label(bathrooms: f32) -> String {
    if bathrooms == 1.0 {
        "1 bath".to_string()
    } else {
        format!("{bathrooms} baths")
    }
}

fn summary_line(record: &PropertyRecord) -> String {
    format!(
        "{} · {} · {}",
        bedrooms_label(record),
        bathrooms_label(record.bathrooms),
        record.property_type
    )
}

fn rating_line(record: &PropertyRecord) -> String {
    format!("★ {:.1} ({} reviews)", record.rating, record.reviews)
}

/// One entry of the listing grid.
pub fn listing_card(position: usize, record: &PropertyRecord, saved: bool) -> String {
    let marker = if saved { " ♥" } else { "" };
    let mut lines = vec![
        format!("{}. {} (${}/month){}", position, record.title, record.price, marker),
        format!("   {}", summary_line(record)),
        format!("   {}", record.location),
        format!("   {}", rating_line(record)),
    ];
    if !record.available {
        lines.push("   Not available".to_string());
    }
    lines.push(format!("   ID: {}", record.id));
    lines.join("\n")
}

/// Full property detail page.
pub fn property_detail(record: &PropertyRecord) -> String {
    let status = if record.available { "Available" } else { "Not available" };
    let mut lines = vec![
        record.title.clone(),
        "=".repeat(record.title.chars().count()),
        record.location.clone(),
        String::new(),
        format!("${}/month", record.price),
        summary_line(record),
        rating_line(record),
        format!("Status: {status}"),
        String::new(),
        record.description.clone(),
    ];
    if !record.amenities.is_empty() {
        lines.push(String::new());
        lines.push(format!("Amenities: {}", record.amenities.join(", ")));
    }
    if !record.images.is_empty() {
        lines.push(format!("Photos: {}", record.images.len()));
    }
    lines.push(String::new());
    lines.push(format!(
        "Listed by {} on {}",
        record.landlord,
        record.date_posted.format("%B %-d, %Y")
    ));
    lines.join("\n")
}
