//! Demo dataset the admin panel boots with.
//!
//! Rows are deterministic (fixed ids and dates) so integration tests and
//! unit tests can refer to them by id.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;
use tokio::sync::RwLock;

use ctu_core::{
    AlertId, AlertSeverity, CurrencyCode, DocumentId, DocumentStatus, Email, ModerationStatus,
    OrderId, OrderStatus, Price, SupplierId, SupplierStatus,
};

use crate::models::{
    AdminOrder, ContentType, DocumentType, PlatformAlert, ReportedContent, SupplierAccount,
    VerificationDocument,
};

use super::MockDb;

fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 9, 0, 0)
        .single()
        .unwrap_or_default()
}

fn eur(cents: i64) -> Price {
    Price::from_cents(cents, CurrencyCode::EUR)
}

fn email(addr: &str) -> Email {
    Email::parse(addr).unwrap_or_else(|_| {
        Email::parse("invalid@chinetonusine.com").expect("placeholder email is valid")
    })
}

/// Build the full demo dataset.
#[must_use]
#[allow(clippy::too_many_lines)] // one flat literal dataset, splitting it would hurt more
pub fn seeded_db() -> MockDb {
    let lefort = SupplierId::new("sup-atelier-lefort");
    let shenzhen = SupplierId::new("sup-shenzhen-led");
    let textiles = SupplierId::new("sup-textiles-nord");
    let pack = SupplierId::new("sup-guangzhou-pack");

    let orders = vec![
        AdminOrder {
            id: OrderId::new("ord-2025-0114"),
            number: "CTU-2025-0114".to_owned(),
            supplier_id: lefort.clone(),
            supplier_name: "Atelier Lefort".to_owned(),
            customer_name: "Brasserie Les Halles".to_owned(),
            total: eur(482_000),
            status: OrderStatus::Delivered,
            placed_at: date(2025, 6, 2),
        },
        AdminOrder {
            id: OrderId::new("ord-2025-0131"),
            number: "CTU-2025-0131".to_owned(),
            supplier_id: lefort.clone(),
            supplier_name: "Atelier Lefort".to_owned(),
            customer_name: "Hôtel Beauregard".to_owned(),
            total: eur(1_265_000),
            status: OrderStatus::Shipped,
            placed_at: date(2025, 6, 18),
        },
        AdminOrder {
            id: OrderId::new("ord-2025-0142"),
            number: "CTU-2025-0142".to_owned(),
            supplier_id: lefort.clone(),
            supplier_name: "Atelier Lefort".to_owned(),
            customer_name: "Coworking Part-Dieu".to_owned(),
            total: eur(329_900),
            status: OrderStatus::Processing,
            placed_at: date(2025, 7, 4),
        },
        AdminOrder {
            id: OrderId::new("ord-2025-0160"),
            number: "CTU-2025-0160".to_owned(),
            supplier_id: shenzhen.clone(),
            supplier_name: "Shenzhen LED Manufacture".to_owned(),
            customer_name: "Grossiste Lumen".to_owned(),
            total: eur(2_140_000),
            status: OrderStatus::Processing,
            placed_at: date(2025, 7, 30),
        },
        AdminOrder {
            id: OrderId::new("ord-2025-0163"),
            number: "CTU-2025-0163".to_owned(),
            supplier_id: pack.clone(),
            supplier_name: "Guangzhou Packaging Co".to_owned(),
            customer_name: "Chocolaterie Royer".to_owned(),
            total: eur(96_000),
            status: OrderStatus::Cancelled,
            placed_at: date(2025, 7, 31),
        },
    ];

    let suppliers = vec![
        SupplierAccount {
            id: lefort.clone(),
            company_name: "Atelier Lefort".to_owned(),
            email: email("contact@atelier-lefort.fr"),
            country: "France".to_owned(),
            verified: true,
            status: SupplierStatus::Active,
            rating: 4.7,
            products: 12,
            joined_at: date(2023, 2, 14),
        },
        SupplierAccount {
            id: shenzhen.clone(),
            company_name: "Shenzhen LED Manufacture".to_owned(),
            email: email("sales@szled-mfg.cn"),
            country: "Chine".to_owned(),
            verified: true,
            status: SupplierStatus::Active,
            rating: 4.5,
            products: 48,
            joined_at: date(2022, 9, 1),
        },
        SupplierAccount {
            id: textiles.clone(),
            company_name: "Textiles du Nord".to_owned(),
            email: email("bonjour@textiles-nord.fr"),
            country: "France".to_owned(),
            verified: false,
            status: SupplierStatus::PendingReview,
            rating: 4.1,
            products: 7,
            joined_at: date(2025, 5, 20),
        },
        SupplierAccount {
            id: pack.clone(),
            company_name: "Guangzhou Packaging Co".to_owned(),
            email: email("hello@gzpack.cn"),
            country: "Chine".to_owned(),
            verified: true,
            status: SupplierStatus::Suspended,
            rating: 3.8,
            products: 23,
            joined_at: date(2023, 11, 3),
        },
    ];

    let documents = vec![
        VerificationDocument {
            id: DocumentId::new("doc-textiles-kbis"),
            supplier_id: textiles.clone(),
            supplier_name: "Textiles du Nord".to_owned(),
            document_type: DocumentType::Kbis,
            status: DocumentStatus::Pending,
            submitted_at: date(2025, 7, 21),
            reviewed_at: None,
            review_note: None,
        },
        VerificationDocument {
            id: DocumentId::new("doc-textiles-assurance"),
            supplier_id: textiles,
            supplier_name: "Textiles du Nord".to_owned(),
            document_type: DocumentType::InsuranceCertificate,
            status: DocumentStatus::Pending,
            submitted_at: date(2025, 7, 22),
            reviewed_at: None,
            review_note: None,
        },
        VerificationDocument {
            id: DocumentId::new("doc-lefort-kbis"),
            supplier_id: lefort,
            supplier_name: "Atelier Lefort".to_owned(),
            document_type: DocumentType::Kbis,
            status: DocumentStatus::Approved,
            submitted_at: date(2023, 2, 10),
            reviewed_at: Some(date(2023, 2, 12)),
            review_note: Some("Extrait de moins de trois mois.".to_owned()),
        },
    ];

    let moderation = vec![
        ReportedContent {
            id: "rep-review-lumen".to_owned(),
            content_type: ContentType::Review,
            excerpt: "Fournisseur à fuir, arnaque totale...".to_owned(),
            reason: "Propos diffamatoires sans commande vérifiée".to_owned(),
            reporter: "Shenzhen LED Manufacture".to_owned(),
            status: ModerationStatus::Pending,
            reported_at: date(2025, 7, 28),
        },
        ReportedContent {
            id: "rep-product-copy".to_owned(),
            content_type: ContentType::Product,
            excerpt: "Panneau LED 60x60 certifié CE".to_owned(),
            reason: "Photos copiées d'un autre fournisseur".to_owned(),
            reporter: "Utilisateur anonyme".to_owned(),
            status: ModerationStatus::Pending,
            reported_at: date(2025, 7, 30),
        },
        ReportedContent {
            id: "rep-message-spam".to_owned(),
            content_type: ContentType::Message,
            excerpt: "Gagnez 5000 euros par semaine...".to_owned(),
            reason: "Spam".to_owned(),
            reporter: "Atelier Lefort".to_owned(),
            status: ModerationStatus::Removed,
            reported_at: date(2025, 7, 12),
        },
    ];

    let alerts = vec![
        PlatformAlert {
            id: AlertId::new("alert-payout-delay"),
            severity: AlertSeverity::Critical,
            message: "Virements fournisseurs retardés par le prestataire de paiement".to_owned(),
            source: "payments".to_owned(),
            read: false,
            created_at: date(2025, 7, 31),
        },
        PlatformAlert {
            id: AlertId::new("alert-docs-backlog"),
            severity: AlertSeverity::Warning,
            message: "File de vérification de documents au-dessus de 48h".to_owned(),
            source: "verification".to_owned(),
            read: false,
            created_at: date(2025, 7, 29),
        },
        PlatformAlert {
            id: AlertId::new("alert-maintenance"),
            severity: AlertSeverity::Info,
            message: "Maintenance planifiée dimanche 03:00-04:00".to_owned(),
            source: "infra".to_owned(),
            read: true,
            created_at: date(2025, 7, 20),
        },
    ];

    let mut settings = HashMap::new();
    settings.insert("platform:commission_pct".to_owned(), json!(7.5));
    settings.insert("platform:maintenance_banner".to_owned(), json!(false));

    MockDb {
        orders: RwLock::new(orders),
        suppliers: RwLock::new(suppliers),
        documents: RwLock::new(documents),
        moderation: RwLock::new(moderation),
        alerts: RwLock::new(alerts),
        settings: RwLock::new(settings),
    }
}
