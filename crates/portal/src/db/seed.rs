//! Demo dataset the portal boots with.
//!
//! Rows are deterministic (fixed ids and dates) so integration tests and the
//! CLI can refer to them by id.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde_json::json;
use tokio::sync::RwLock;

use ctu_core::{
    CollaborationId, CollaborationStatus, ConversationId, Email, OrderId, OrderStatus, Price,
    ReviewId, SupplierId, SupplierStatus, UserId,
};

use crate::models::{
    Collaboration, Conversation, CustomerAccount, Message, MonthlyStat, ProductSummary,
    ReferralAccount, Review, StarTransaction, SupplierOrder, SupplierProfile,
};

use super::MockDb;

/// The demo supplier whose owner account the portal defaults to.
pub const DEMO_SUPPLIER_ID: &str = "sup-atelier-lefort";

/// The demo influencer account.
pub const DEMO_INFLUENCER_ID: &str = "u-lea";

fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 10, 0, 0)
        .single()
        .unwrap_or_default()
}

fn eur(cents: i64) -> Price {
    Price::from_cents(cents, ctu_core::CurrencyCode::EUR)
}

fn email(addr: &str) -> Email {
    // Seed addresses are compile-time constants; fall back to a placeholder
    // rather than panicking if one is ever edited into an invalid form.
    Email::parse(addr).unwrap_or_else(|_| {
        Email::parse("invalid@chinetonusine.com").expect("placeholder email is valid")
    })
}

/// Build the full demo dataset.
#[must_use]
#[allow(clippy::too_many_lines)] // one flat literal dataset, splitting it would hurt more
pub fn seeded_db() -> MockDb {
    let lefort = SupplierId::new(DEMO_SUPPLIER_ID);
    let shenzhen = SupplierId::new("sup-shenzhen-led");
    let textiles = SupplierId::new("sup-textiles-nord");
    let pack = SupplierId::new("sup-guangzhou-pack");
    let lea = UserId::new(DEMO_INFLUENCER_ID);

    let suppliers = vec![
        SupplierProfile {
            id: lefort.clone(),
            company_name: "Atelier Lefort".to_owned(),
            description: "Mobilier professionnel sur mesure pour CHR et bureaux.".to_owned(),
            sector: "Mobilier".to_owned(),
            city: "Lyon".to_owned(),
            country: "France".to_owned(),
            email: email("contact@atelier-lefort.fr"),
            phone: "+33 6 12 34 56 78".to_owned(),
            website: Some("https://atelier-lefort.fr".to_owned()),
            verified: true,
            status: SupplierStatus::Active,
            rating: 4.7,
            joined_at: date(2023, 2, 14),
        },
        SupplierProfile {
            id: shenzhen.clone(),
            company_name: "Shenzhen LED Manufacture".to_owned(),
            description: "Éclairage LED industriel, OEM/ODM, certifications CE.".to_owned(),
            sector: "Éclairage".to_owned(),
            city: "Shenzhen".to_owned(),
            country: "Chine".to_owned(),
            email: email("sales@szled-mfg.cn"),
            phone: "+86 755 0000 0000".to_owned(),
            website: Some("https://szled-mfg.cn".to_owned()),
            verified: true,
            status: SupplierStatus::Active,
            rating: 4.5,
            joined_at: date(2022, 9, 1),
        },
        SupplierProfile {
            id: textiles.clone(),
            company_name: "Textiles du Nord".to_owned(),
            description: "Tissus techniques et confection en petites séries.".to_owned(),
            sector: "Textile".to_owned(),
            city: "Lille".to_owned(),
            country: "France".to_owned(),
            email: email("bonjour@textiles-nord.fr"),
            phone: "+33 3 20 00 00 00".to_owned(),
            website: None,
            verified: false,
            status: SupplierStatus::PendingReview,
            rating: 4.1,
            joined_at: date(2025, 5, 20),
        },
        SupplierProfile {
            id: pack.clone(),
            company_name: "Guangzhou Packaging Co".to_owned(),
            description: "Emballage carton et PLV, impression offset.".to_owned(),
            sector: "Emballage".to_owned(),
            city: "Guangzhou".to_owned(),
            country: "Chine".to_owned(),
            email: email("hello@gzpack.cn"),
            phone: "+86 20 0000 0000".to_owned(),
            website: None,
            verified: true,
            status: SupplierStatus::Suspended,
            rating: 3.8,
            joined_at: date(2023, 11, 3),
        },
    ];

    let orders = vec![
        SupplierOrder {
            id: OrderId::new("ord-2025-0114"),
            number: "CTU-2025-0114".to_owned(),
            supplier_id: lefort.clone(),
            customer_name: "Brasserie Les Halles".to_owned(),
            total: eur(482_000),
            status: OrderStatus::Delivered,
            placed_at: date(2025, 6, 2),
        },
        SupplierOrder {
            id: OrderId::new("ord-2025-0131"),
            number: "CTU-2025-0131".to_owned(),
            supplier_id: lefort.clone(),
            customer_name: "Hôtel Beauregard".to_owned(),
            total: eur(1_265_000),
            status: OrderStatus::Shipped,
            placed_at: date(2025, 6, 18),
        },
        SupplierOrder {
            id: OrderId::new("ord-2025-0142"),
            number: "CTU-2025-0142".to_owned(),
            supplier_id: lefort.clone(),
            customer_name: "Coworking Part-Dieu".to_owned(),
            total: eur(329_900),
            status: OrderStatus::Processing,
            placed_at: date(2025, 7, 4),
        },
        SupplierOrder {
            id: OrderId::new("ord-2025-0155"),
            number: "CTU-2025-0155".to_owned(),
            supplier_id: lefort.clone(),
            customer_name: "Brasserie Les Halles".to_owned(),
            total: eur(86_400),
            status: OrderStatus::Pending,
            placed_at: date(2025, 7, 29),
        },
        SupplierOrder {
            id: OrderId::new("ord-2025-0160"),
            number: "CTU-2025-0160".to_owned(),
            supplier_id: shenzhen.clone(),
            customer_name: "Grossiste Lumen".to_owned(),
            total: eur(2_140_000),
            status: OrderStatus::Processing,
            placed_at: date(2025, 7, 30),
        },
    ];

    let customers = vec![
        CustomerAccount {
            id: UserId::new("u-buyer-halles"),
            supplier_id: lefort.clone(),
            name: "Paul Renard".to_owned(),
            company: "Brasserie Les Halles".to_owned(),
            email: email("paul@brasserie-leshalles.fr"),
            country: "France".to_owned(),
            orders_count: 2,
            total_spent: eur(568_400),
            last_order_at: date(2025, 7, 29),
        },
        CustomerAccount {
            id: UserId::new("u-buyer-beauregard"),
            supplier_id: lefort.clone(),
            name: "Inès Dupuy".to_owned(),
            company: "Hôtel Beauregard".to_owned(),
            email: email("i.dupuy@beauregard.fr"),
            country: "France".to_owned(),
            orders_count: 1,
            total_spent: eur(1_265_000),
            last_order_at: date(2025, 6, 18),
        },
        CustomerAccount {
            id: UserId::new("u-buyer-partdieu"),
            supplier_id: lefort.clone(),
            name: "Sofiane Kacem".to_owned(),
            company: "Coworking Part-Dieu".to_owned(),
            email: email("sofiane@cw-partdieu.fr"),
            country: "France".to_owned(),
            orders_count: 1,
            total_spent: eur(329_900),
            last_order_at: date(2025, 7, 4),
        },
    ];

    let conversations = vec![
        Conversation {
            id: ConversationId::new("conv-halles"),
            supplier_id: lefort.clone(),
            contact_name: "Paul Renard".to_owned(),
            subject: "Délai pour 12 tables supplémentaires".to_owned(),
            messages: vec![
                Message {
                    id: "msg-halles-1".to_owned(),
                    from_supplier: false,
                    body: "Bonjour, quel délai pour 12 tables identiques à la commande 0114 ?"
                        .to_owned(),
                    sent_at: date(2025, 7, 25),
                    read: true,
                },
                Message {
                    id: "msg-halles-2".to_owned(),
                    from_supplier: true,
                    body: "Bonjour Paul, comptez 3 semaines départ atelier.".to_owned(),
                    sent_at: date(2025, 7, 25),
                    read: true,
                },
                Message {
                    id: "msg-halles-3".to_owned(),
                    from_supplier: false,
                    body: "Parfait, je valide le devis.".to_owned(),
                    sent_at: date(2025, 7, 28),
                    read: false,
                },
            ],
        },
        Conversation {
            id: ConversationId::new("conv-beauregard"),
            supplier_id: lefort.clone(),
            contact_name: "Inès Dupuy".to_owned(),
            subject: "Teinte chêne clair".to_owned(),
            messages: vec![Message {
                id: "msg-beauregard-1".to_owned(),
                from_supplier: false,
                body: "Pouvez-vous envoyer un échantillon de la teinte chêne clair ?".to_owned(),
                sent_at: date(2025, 7, 30),
                read: false,
            }],
        },
    ];

    let reviews = vec![
        Review {
            id: ReviewId::new("rev-1"),
            supplier_id: lefort.clone(),
            author: "Brasserie Les Halles".to_owned(),
            rating: 5,
            comment: "Finitions impeccables, livraison dans les temps.".to_owned(),
            reply: Some("Merci Paul, au plaisir !".to_owned()),
            posted_at: date(2025, 6, 10),
        },
        Review {
            id: ReviewId::new("rev-2"),
            supplier_id: lefort.clone(),
            author: "Coworking Part-Dieu".to_owned(),
            rating: 4,
            comment: "Très bon rapport qualité/prix, notice de montage perfectible.".to_owned(),
            reply: None,
            posted_at: date(2025, 7, 12),
        },
        Review {
            id: ReviewId::new("rev-3"),
            supplier_id: shenzhen.clone(),
            author: "Grossiste Lumen".to_owned(),
            rating: 4,
            comment: "Bon suivi de production.".to_owned(),
            reply: None,
            posted_at: date(2025, 7, 20),
        },
    ];

    let monthly_stats = (1..=7u32)
        .map(|m| MonthlyStat {
            supplier_id: lefort.clone(),
            month: format!("2025-{m:02}"),
            profile_views: 240 + m * 35,
            orders: m % 3 + 1,
            revenue: eur(i64::from(m) * 210_000),
        })
        .collect();

    let products = vec![
        ProductSummary {
            id: "prod-table-bistrot".to_owned(),
            supplier_id: lefort.clone(),
            name: "Table bistrot chêne".to_owned(),
            category: "Mobilier".to_owned(),
            orders: 34,
            revenue: eur(1_420_000),
        },
        ProductSummary {
            id: "prod-banquette".to_owned(),
            supplier_id: lefort.clone(),
            name: "Banquette velours".to_owned(),
            category: "Mobilier".to_owned(),
            orders: 12,
            revenue: eur(864_000),
        },
        ProductSummary {
            id: "prod-panneau-led".to_owned(),
            supplier_id: shenzhen.clone(),
            name: "Panneau LED 60x60".to_owned(),
            category: "Éclairage".to_owned(),
            orders: 120,
            revenue: eur(3_960_000),
        },
        ProductSummary {
            id: "prod-caisse-carton".to_owned(),
            supplier_id: pack.clone(),
            name: "Caisse double cannelure".to_owned(),
            category: "Emballage".to_owned(),
            orders: 300,
            revenue: eur(450_000),
        },
    ];

    let collaborations = vec![
        Collaboration {
            id: CollaborationId::new("collab-led-printemps"),
            influencer_id: lea.clone(),
            supplier_id: shenzhen.clone(),
            supplier_name: "Shenzhen LED Manufacture".to_owned(),
            campaign: "Campagne rénovation printemps".to_owned(),
            commission_pct: Decimal::new(80, 1), // 8.0%
            status: CollaborationStatus::Active,
            started_at: date(2025, 4, 1),
        },
        Collaboration {
            id: CollaborationId::new("collab-mobilier-chr"),
            influencer_id: lea.clone(),
            supplier_id: lefort.clone(),
            supplier_name: "Atelier Lefort".to_owned(),
            campaign: "Mobilier CHR rentrée".to_owned(),
            commission_pct: Decimal::new(100, 1), // 10.0%
            status: CollaborationStatus::Pending,
            started_at: date(2025, 7, 22),
        },
        Collaboration {
            id: CollaborationId::new("collab-pack-hiver"),
            influencer_id: lea.clone(),
            supplier_id: pack.clone(),
            supplier_name: "Guangzhou Packaging Co".to_owned(),
            campaign: "Emballage fêtes 2024".to_owned(),
            commission_pct: Decimal::new(60, 1), // 6.0%
            status: CollaborationStatus::Completed,
            started_at: date(2024, 10, 15),
        },
    ];

    let referrals = vec![ReferralAccount {
        influencer_id: lea.clone(),
        code: "CTU-LEA24".to_owned(),
        clicks: 342,
        signups: 28,
        earnings: eur(48_650),
    }];

    let stars = vec![
        StarTransaction {
            id: "star-welcome".to_owned(),
            influencer_id: lea.clone(),
            delta: 100,
            reason: "Bonus de bienvenue".to_owned(),
            occurred_at: date(2024, 9, 1),
        },
        StarTransaction {
            id: "star-campaign-led".to_owned(),
            influencer_id: lea.clone(),
            delta: 45,
            reason: "Campagne LED validée".to_owned(),
            occurred_at: date(2025, 5, 2),
        },
        StarTransaction {
            id: "star-redeem-1".to_owned(),
            influencer_id: lea,
            delta: -50,
            reason: "Échange: mise en avant profil".to_owned(),
            occurred_at: date(2025, 6, 15),
        },
    ];

    let mut settings = HashMap::new();
    settings.insert(
        format!("supplier:{DEMO_SUPPLIER_ID}:language"),
        json!("fr"),
    );
    settings.insert(
        format!("supplier:{DEMO_SUPPLIER_ID}:notifications"),
        json!({ "email": true, "weekly_digest": false }),
    );

    MockDb {
        suppliers: RwLock::new(suppliers),
        orders: RwLock::new(orders),
        customers: RwLock::new(customers),
        conversations: RwLock::new(conversations),
        reviews: RwLock::new(reviews),
        monthly_stats: RwLock::new(monthly_stats),
        products: RwLock::new(products),
        collaborations: RwLock::new(collaborations),
        referrals: RwLock::new(referrals),
        stars: RwLock::new(stars),
        settings: RwLock::new(settings),
    }
}
