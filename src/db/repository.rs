//! Database repository for the site tables.
//!
//! Uses prepared statements; every write inserts exactly one row.

use chrono::{NaiveDate, Utc};
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{
    ContactMessage, CreateContactMessageRequest, CreateGalleryImageRequest, CreateRoomRequest,
    GalleryCategory, GalleryImage, Reservation, Room, RoomFilter,
};

/// Reservation row ready to be stored.
///
/// Guest counts and ages are already normalized by the caller.
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub adults: u32,
    pub children: u32,
    pub child_ages: Vec<u8>,
    pub room_id: Option<String>,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: String,
    pub special_requests: Option<String>,
}

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ==================== ROOM OPERATIONS ====================

    /// List rooms in display order, optionally keeping only those sleeping `min_capacity` or more.
    pub async fn list_rooms(&self, filter: &RoomFilter) -> Result<Vec<Room>, AppError> {
        let rows = sqlx::query(
            r#"SELECT id, name_fr, name_en, description_fr, description_en, image_url,
                      type_fr, type_en, capacity, surface, price_per_night, devise,
                      status_fr, status_en, amenities_fr, amenities_en, order_position, created_at
               FROM rooms
               WHERE (?1 IS NULL OR capacity >= ?1)
               ORDER BY order_position ASC, created_at ASC"#,
        )
        .bind(filter.min_capacity)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(room_from_row).collect())
    }

    /// Get a room by ID.
    pub async fn get_room(&self, id: &str) -> Result<Option<Room>, AppError> {
        let row = sqlx::query(
            r#"SELECT id, name_fr, name_en, description_fr, description_en, image_url,
                      type_fr, type_en, capacity, surface, price_per_night, devise,
                      status_fr, status_en, amenities_fr, amenities_en, order_position, created_at
               FROM rooms WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(room_from_row))
    }

    /// Number of rooms in the catalog.
    pub async fn count_rooms(&self) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM rooms")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get("total"))
    }

    /// Create a new room.
    pub async fn create_room(&self, request: &CreateRoomRequest) -> Result<Room, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();
        let images_json = serde_json::to_string(&request.image_url)?;
        let amenities_fr_json = serde_json::to_string(&request.amenities_fr)?;
        let amenities_en_json = serde_json::to_string(&request.amenities_en)?;

        sqlx::query(
            r#"INSERT INTO rooms (id, name_fr, name_en, description_fr, description_en, image_url,
                                  type_fr, type_en, capacity, surface, price_per_night, devise,
                                  status_fr, status_en, amenities_fr, amenities_en, order_position, created_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&id)
        .bind(&request.name_fr)
        .bind(&request.name_en)
        .bind(&request.description_fr)
        .bind(&request.description_en)
        .bind(&images_json)
        .bind(&request.type_fr)
        .bind(&request.type_en)
        .bind(request.capacity)
        .bind(request.surface)
        .bind(request.price_per_night)
        .bind(&request.devise)
        .bind(&request.status_fr)
        .bind(&request.status_en)
        .bind(&amenities_fr_json)
        .bind(&amenities_en_json)
        .bind(request.order_position)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(Room {
            id,
            name_fr: request.name_fr.clone(),
            name_en: request.name_en.clone(),
            description_fr: request.description_fr.clone(),
            description_en: request.description_en.clone(),
            image_url: request.image_url.clone(),
            type_fr: request.type_fr.clone(),
            type_en: request.type_en.clone(),
            capacity: request.capacity,
            surface: request.surface,
            price_per_night: request.price_per_night,
            devise: request.devise.clone(),
            status_fr: request.status_fr.clone(),
            status_en: request.status_en.clone(),
            amenities_fr: request.amenities_fr.clone(),
            amenities_en: request.amenities_en.clone(),
            order_position: request.order_position,
            created_at: now,
        })
    }

    // ==================== GALLERY OPERATIONS ====================

    /// List gallery images in display order.
    pub async fn list_gallery_images(&self) -> Result<Vec<GalleryImage>, AppError> {
        let rows = sqlx::query(
            "SELECT id, image_url, category, alt_key, order_position, created_at FROM gallery_images ORDER BY order_position ASC, created_at ASC"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().filter_map(gallery_image_from_row).collect())
    }

    /// Add an image to the gallery.
    pub async fn create_gallery_image(
        &self,
        request: &CreateGalleryImageRequest,
    ) -> Result<GalleryImage, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO gallery_images (id, image_url, category, alt_key, order_position, created_at) VALUES (?, ?, ?, ?, ?, ?)"
        )
        .bind(&id)
        .bind(&request.image_url)
        .bind(request.category.as_str())
        .bind(&request.alt_key)
        .bind(request.order_position)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(GalleryImage {
            id,
            image_url: request.image_url.clone(),
            category: request.category,
            alt_key: request.alt_key.clone(),
            order_position: request.order_position,
            created_at: now,
        })
    }

    // ==================== CONTACT OPERATIONS ====================

    /// Store a contact form submission.
    pub async fn create_contact_message(
        &self,
        request: &CreateContactMessageRequest,
    ) -> Result<ContactMessage, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO contact_messages (id, name, email, phone, message, created_at) VALUES (?, ?, ?, ?, ?, ?)"
        )
        .bind(&id)
        .bind(&request.name)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(&request.message)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(ContactMessage {
            id,
            name: request.name.clone(),
            email: request.email.clone(),
            phone: request.phone.clone(),
            message: request.message.clone(),
            created_at: now,
        })
    }

    /// List contact messages, newest first.
    pub async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        let rows = sqlx::query(
            "SELECT id, name, email, phone, message, created_at FROM contact_messages ORDER BY created_at DESC"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(contact_message_from_row).collect())
    }

    // ==================== RESERVATION OPERATIONS ====================

    /// Store a reservation request.
    pub async fn create_reservation(
        &self,
        reservation: NewReservation,
    ) -> Result<Reservation, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();
        let ages_json = serde_json::to_string(&reservation.child_ages)?;

        sqlx::query(
            r#"INSERT INTO reservations (id, check_in, check_out, adults, children, child_ages, room_id,
                                         guest_name, guest_email, guest_phone, special_requests, created_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&id)
        .bind(reservation.check_in)
        .bind(reservation.check_out)
        .bind(i64::from(reservation.adults))
        .bind(i64::from(reservation.children))
        .bind(&ages_json)
        .bind(&reservation.room_id)
        .bind(&reservation.guest_name)
        .bind(&reservation.guest_email)
        .bind(&reservation.guest_phone)
        .bind(&reservation.special_requests)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(Reservation {
            id,
            check_in: reservation.check_in,
            check_out: reservation.check_out,
            adults: reservation.adults,
            children: reservation.children,
            child_ages: reservation.child_ages,
            room_id: reservation.room_id,
            guest_name: reservation.guest_name,
            guest_email: reservation.guest_email,
            guest_phone: reservation.guest_phone,
            special_requests: reservation.special_requests,
            created_at: now,
        })
    }

    /// List reservations, newest first.
    pub async fn list_reservations(&self) -> Result<Vec<Reservation>, AppError> {
        let rows = sqlx::query(
            r#"SELECT id, check_in, check_out, adults, children, child_ages, room_id,
                      guest_name, guest_email, guest_phone, special_requests, created_at
               FROM reservations ORDER BY created_at DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(reservation_from_row).collect())
    }
}

fn room_from_row(row: &sqlx::sqlite::SqliteRow) -> Room {
    let images_str: String = row.get("image_url");
    let amenities_fr_str: String = row.get("amenities_fr");
    let amenities_en_str: String = row.get("amenities_en");
    Room {
        id: row.get("id"),
        name_fr: row.get("name_fr"),
        name_en: row.get("name_en"),
        description_fr: row.get("description_fr"),
        description_en: row.get("description_en"),
        image_url: parse_json_array(&images_str),
        type_fr: row.get("type_fr"),
        type_en: row.get("type_en"),
        capacity: row.get("capacity"),
        surface: row.get("surface"),
        price_per_night: row.get("price_per_night"),
        devise: row.get("devise"),
        status_fr: row.get("status_fr"),
        status_en: row.get("status_en"),
        amenities_fr: parse_json_array(&amenities_fr_str),
        amenities_en: parse_json_array(&amenities_en_str),
        order_position: row.get("order_position"),
        created_at: row.get("created_at"),
    }
}

/// Rows with a category outside the known set are skipped.
fn gallery_image_from_row(row: &sqlx::sqlite::SqliteRow) -> Option<GalleryImage> {
    let category_str: String = row.get("category");
    let category = match category_str.parse::<GalleryCategory>() {
        Ok(category) => category,
        Err(e) => {
            tracing::warn!("Skipping gallery image: {}", e);
            return None;
        }
    };
    Some(GalleryImage {
        id: row.get("id"),
        image_url: row.get("image_url"),
        category,
        alt_key: row.get("alt_key"),
        order_position: row.get("order_position"),
        created_at: row.get("created_at"),
    })
}

fn contact_message_from_row(row: &sqlx::sqlite::SqliteRow) -> ContactMessage {
    ContactMessage {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        phone: row.get("phone"),
        message: row.get("message"),
        created_at: row.get("created_at"),
    }
}

fn reservation_from_row(row: &sqlx::sqlite::SqliteRow) -> Reservation {
    let adults: i64 = row.get("adults");
    let children: i64 = row.get("children");
    let ages_str: String = row.get("child_ages");
    Reservation {
        id: row.get("id"),
        check_in: row.get("check_in"),
        check_out: row.get("check_out"),
        adults: adults as u32,
        children: children as u32,
        child_ages: serde_json::from_str(&ages_str).unwrap_or_default(),
        room_id: row.get("room_id"),
        guest_name: row.get("guest_name"),
        guest_email: row.get("guest_email"),
        guest_phone: row.get("guest_phone"),
        special_requests: row.get("special_requests"),
        created_at: row.get("created_at"),
    }
}

fn parse_json_array(s: &str) -> Vec<String> {
    serde_json::from_str(s).unwrap_or_default()
}
