use chrono::NaiveDateTime;
use pubcrawl_models::{parse_create_ts, Pub};

pub fn ts(raw: &str) -> NaiveDateTime {
    parse_create_ts(raw).unwrap()
}

pub fn create_pub(name: &str, id: &str, branch: &str, created_at: &str) -> Pub {
    Pub {
        name: name.to_string(),
        postcode: None,
        regular_beers: None,
        guest_beers: None,
        service_url: format!("https://pubcrawlapi.appspot.com/pub/?v=1&id={}&branch={}", id, branch),
        id: id.to_string(),
        branch: branch.to_string(),
        created_at: ts(created_at),
    }
}

pub fn pub_with_beers(id: &str, regular: Option<&[&str]>, guest: Option<&[&str]>) -> Pub {
    let to_vec = |beers: &[&str]| beers.iter().map(|b| b.to_string()).collect::<Vec<_>>();
    Pub {
        regular_beers: regular.map(to_vec),
        guest_beers: guest.map(to_vec),
        ..create_pub(&format!("Pub {}", id), id, "WLD", "2019-05-16 19:31:39")
    }
}
