use bigdecimal::BigDecimal;
use diesel::prelude::*;

use crate::db::DbPool;
use crate::models::category::NewCategory;
use crate::models::product::NewProduct;
use crate::models::user::NewUser;
use crate::schema::{categories, products, users};

const ADMIN_USERNAME: &str = "admin";

const DEFAULT_CATEGORIES: [&str; 10] = [
    "Đồ chơi",
    "Quần áo",
    "Giày dép",
    "Xe đẩy",
    "Bình sữa",
    "Tã bỉm",
    "Sữa bột",
    "Nôi cũi",
    "Ghế ăn dặm",
    "Đồ dùng tắm",
];

struct SeedProduct {
    name: &'static str,
    description: &'static str,
    category: &'static str,
    buy_price: i64,
    rent_price: i64,
    condition_percentage: i32,
    address_contact: &'static str,
}

const SEED_PRODUCTS: [SeedProduct; 6] = [
    SeedProduct {
        name: "Máy tiệt trùng bình sữa UV",
        description: "Máy tiệt trùng hiện đại với công nghệ UV, an toàn cho bé",
        category: "Bình sữa",
        buy_price: 1_500_000,
        rent_price: 150_000,
        condition_percentage: 95,
        address_contact: "123 Nguyễn Văn Cừ, Q.5, TP.HCM",
    },
    SeedProduct {
        name: "Máy hút sữa điện tử thông minh",
        description: "Máy hút sữa với nhiều chế độ massage tự nhiên",
        category: "Bình sữa",
        buy_price: 2_000_000,
        rent_price: 200_000,
        condition_percentage: 98,
        address_contact: "456 Lê Văn Sỹ, Q.3, TP.HCM",
    },
    SeedProduct {
        name: "Nôi em bé thông minh",
        description: "Nôi có chức năng ru tự động và phát nhạc",
        category: "Nôi cũi",
        buy_price: 5_000_000,
        rent_price: 500_000,
        condition_percentage: 92,
        address_contact: "789 Võ Văn Tần, Q.3, TP.HCM",
    },
    SeedProduct {
        name: "Xe đẩy em bé cao cấp",
        description: "Xe đẩy nhẹ, gấp gọn, phù hợp cho trẻ từ 0-3 tuổi",
        category: "Xe đẩy",
        buy_price: 3_000_000,
        rent_price: 300_000,
        condition_percentage: 90,
        address_contact: "321 Điện Biên Phủ, Q.Bình Thạnh, TP.HCM",
    },
    SeedProduct {
        name: "Ghế ăn dặm cho bé",
        description: "Ghế ăn dặm an toàn, có thể điều chỉnh độ cao",
        category: "Ghế ăn dặm",
        buy_price: 800_000,
        rent_price: 80_000,
        condition_percentage: 85,
        address_contact: "654 Cách Mạng Tháng 8, Q.10, TP.HCM",
    },
    SeedProduct {
        name: "Bộ đồ chơi giáo dục",
        description: "Bộ đồ chơi phát triển trí tuệ cho trẻ 1-3 tuổi",
        category: "Đồ chơi",
        buy_price: 600_000,
        rent_price: 60_000,
        condition_percentage: 88,
        address_contact: "987 Nguyễn Thị Minh Khai, Q.1, TP.HCM",
    },
];

/// Seed default data once at process start, inside a single transaction.
pub fn run(pool: &DbPool) {
    let mut conn = pool.get().expect("Failed to get DB connection for bootstrap");
    conn.transaction(|c| seed_defaults(c))
        .expect("Failed to seed default data");
}

/// Idempotent first-run seeding. Every step is guarded by an existence
/// check against the store, so re-running at every process start never
/// duplicates rows.
pub fn seed_defaults(conn: &mut PgConnection) -> QueryResult<()> {
    if users::table.count().get_result::<i64>(conn)? == 0 {
        diesel::insert_into(users::table)
            .values(&NewUser {
                username: ADMIN_USERNAME.to_string(),
                email: "admin@marketplace.local".to_string(),
                // Placeholder hash; real credentials are managed by the
                // account service, not by seeding.
                password: "$2a$10$seed.placeholder.hash".to_string(),
                full_name: Some("Admin User".to_string()),
                role: "ADMIN".to_string(),
            })
            .execute(conn)?;
        log::info!("Seeded default admin user");
    }

    if categories::table.count().get_result::<i64>(conn)? == 0 {
        let rows: Vec<NewCategory> = DEFAULT_CATEGORIES
            .iter()
            .map(|name| NewCategory {
                name: name.to_string(),
                parent_id: None,
            })
            .collect();
        diesel::insert_into(categories::table)
            .values(&rows)
            .execute(conn)?;
        log::info!("Seeded {} default categories", DEFAULT_CATEGORIES.len());
    }

    if products::table.count().get_result::<i64>(conn)? == 0 {
        // Sample listings hang off the seeded admin account. On a database
        // that already has users but no admin, there is no deterministic
        // owner to attach them to, so skip rather than guess.
        let seller_id = users::table
            .filter(users::username.eq(ADMIN_USERNAME))
            .select(users::id)
            .first::<i64>(conn)
            .optional()?;
        let Some(seller_id) = seller_id else {
            log::warn!("No '{}' user present; skipping sample products", ADMIN_USERNAME);
            return Ok(());
        };

        let mut seeded = 0;
        for seed in &SEED_PRODUCTS {
            let category_id = categories::table
                .filter(categories::name.eq(seed.category))
                .select(categories::id)
                .first::<i64>(conn)
                .optional()?;
            diesel::insert_into(products::table)
                .values(&NewProduct {
                    seller_id,
                    category_id,
                    name: seed.name.to_string(),
                    description: Some(seed.description.to_string()),
                    condition_percentage: Some(seed.condition_percentage),
                    trade_type: "BOTH".to_string(),
                    buy_price: Some(BigDecimal::from(seed.buy_price)),
                    rent_price: Some(BigDecimal::from(seed.rent_price)),
                    rent_unit: Some("MONTH".to_string()),
                    status: "ACTIVE".to_string(),
                    address_contact: Some(seed.address_contact.to_string()),
                })
                .execute(conn)?;
            seeded += 1;
        }
        log::info!("Seeded {} sample products", seeded);
    }

    Ok(())
}
