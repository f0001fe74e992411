//! Canned publication records and catalogs for tests.

use std::collections::BTreeSet;

use crate::catalog::{CatalogDocument, CatalogStore, FilterVocabulary, PublicationRecord};

/// A bare record with the given id, name and price; everything else default.
pub fn record(id: u64, name: &str, price: f64) -> PublicationRecord {
    PublicationRecord {
        id,
        name: name.to_string(),
        genres: Vec::new(),
        price,
        domain_authority: 0,
        turnaround_time: String::new(),
        region: String::new(),
        sponsored: false,
        indexed: false,
        do_follow: false,
        publication_type: String::new(),
        lifespan: String::new(),
        mention_style: String::new(),
        status: String::new(),
        image: String::new(),
    }
}

fn tagged(
    id: u64,
    name: &str,
    price: f64,
    genre: &str,
    region: &str,
    sponsored: bool,
) -> PublicationRecord {
    PublicationRecord {
        genres: vec![genre.to_string()],
        region: region.to_string(),
        sponsored,
        ..record(id, name, price)
    }
}

pub fn business_record(
    id: u64,
    name: &str,
    price: f64,
    region: &str,
    sponsored: bool,
) -> PublicationRecord {
    tagged(id, name, price, "Business", region, sponsored)
}

pub fn tech_record(
    id: u64,
    name: &str,
    price: f64,
    region: &str,
    sponsored: bool,
) -> PublicationRecord {
    tagged(id, name, price, "Tech", region, sponsored)
}

pub fn news_record(
    id: u64,
    name: &str,
    price: f64,
    region: &str,
    sponsored: bool,
) -> PublicationRecord {
    tagged(id, name, price, "News", region, sponsored)
}

/// Build a store from records, deriving the vocabulary from their fields.
pub fn catalog_of(publications: Vec<PublicationRecord>) -> CatalogStore {
    let genres: BTreeSet<String> = publications
        .iter()
        .flat_map(|r| r.genres.iter().cloned())
        .collect();
    let regions: BTreeSet<String> = publications
        .iter()
        .map(|r| r.region.clone())
        .filter(|r| !r.is_empty())
        .collect();

    CatalogStore::from_document(CatalogDocument {
        publications,
        filters: FilterVocabulary {
            genres: genres.into_iter().collect(),
            regions: regions.into_iter().collect(),
            publication_types: Vec::new(),
        },
    })
}

/// A five-record catalog covering both regions, all three genres, mixed
/// sponsorship, and a spread of turnaround estimates.
pub fn sample_catalog() -> CatalogStore {
    let mut forbes = business_record(1, "Forbes", 5000.0, "USA", true);
    forbes.domain_authority = 94;
    forbes.turnaround_time = "3 days".to_string();
    forbes.indexed = true;
    forbes.do_follow = true;

    let mut wired = tech_record(2, "Wired", 3000.0, "USA", false);
    wired.domain_authority = 91;
    wired.turnaround_time = "1 week".to_string();
    wired.indexed = true;

    let mut bbc = news_record(3, "BBC", 0.0, "UK", false);
    bbc.domain_authority = 97;

    let mut techcrunch = tech_record(4, "TechCrunch", 2500.0, "USA", true);
    techcrunch.domain_authority = 93;
    techcrunch.turnaround_time = "2 weeks".to_string();
    techcrunch.indexed = true;

    let mut guardian = news_record(5, "The Guardian", 1500.0, "UK", false);
    guardian.domain_authority = 95;
    guardian.turnaround_time = "1 month".to_string();
    guardian.do_follow = true;

    catalog_of(vec![forbes, wired, bbc, techcrunch, guardian])
}
