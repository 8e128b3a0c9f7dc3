//! Showcase rooms for a fresh install.

use super::Repository;
use crate::errors::AppError;
use crate::models::CreateRoomRequest;

#[allow(clippy::too_many_arguments)]
fn showcase_room(
    name: &str,
    description_fr: &str,
    description_en: &str,
    price: f64,
    capacity: i64,
    surface: f64,
    image: &str,
    amenities: &[&str],
    order_position: i64,
) -> CreateRoomRequest {
    CreateRoomRequest {
        name_fr: name.to_string(),
        name_en: name.to_string(),
        description_fr: description_fr.to_string(),
        description_en: description_en.to_string(),
        image_url: vec![format!("{}?w=800&h=600&fit=crop", image)],
        type_fr: String::new(),
        type_en: String::new(),
        capacity,
        surface,
        price_per_night: price,
        devise: "MAD".to_string(),
        status_fr: "Disponible".to_string(),
        status_en: "Available".to_string(),
        amenities_fr: amenities.iter().map(|a| a.to_string()).collect(),
        amenities_en: amenities.iter().map(|a| a.to_string()).collect(),
        order_position,
    }
}

/// Insert the showcase rooms when the catalog is empty. Returns how many were added.
pub async fn seed_demo_rooms(repo: &Repository) -> Result<usize, AppError> {
    if repo.count_rooms().await? > 0 {
        return Ok(0);
    }

    let rooms = [
        showcase_room(
            "Chambre Atlas",
            "Chambre spacieuse avec vue sur les montagnes et décor berbère traditionnel",
            "Spacious room with mountain views and traditional Berber decor",
            120.0,
            2,
            30.0,
            "https://images.unsplash.com/photo-1590490360182-c33d57733427",
            &["King Bed", "Mountain View", "Air Conditioning", "WiFi"],
            1,
        ),
        showcase_room(
            "Suite Lac",
            "Suite de luxe avec vue panoramique sur le lac et balcon privé",
            "Luxury suite with panoramic lake views and private balcony",
            180.0,
            3,
            45.0,
            "https://images.unsplash.com/photo-1582719478250-c89cae4dc85b",
            &["King Bed", "Lake View", "Balcony", "Mini Bar", "WiFi"],
            2,
        ),
        showcase_room(
            "Chambre Familiale",
            "Chambre familiale avec deux chambres et un salon commun",
            "Family room with two bedrooms and shared living area",
            200.0,
            4,
            55.0,
            "https://images.unsplash.com/photo-1566665797739-1674de7a421a",
            &["2 Bedrooms", "Living Area", "Garden View", "WiFi"],
            3,
        ),
    ];

    for room in &rooms {
        let created = repo.create_room(room).await?;
        tracing::info!("Seeded room {} ({})", created.name_en, created.id);
    }

    Ok(rooms.len())
}
