// src/gui/router.rs
use crate::config::options::PageKind::{ self, * };
use super::pages::{ self, Page };

pub static PAGES: &[&'static dyn Page] = &[
    &pages::trips::PAGE,
    &pages::editor::PAGE,
    &pages::featured::PAGE,
    &pages::photos::PAGE,
    &pages::publish::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn page_for(kind: PageKind) -> &'static dyn Page {
    match kind {
        Trips    => &pages::trips::PAGE,
        Editor   => &pages::editor::PAGE,
        Featured => &pages::featured::PAGE,
        Photos   => &pages::photos::PAGE,
        Publish  => &pages::publish::PAGE,
    }
}

pub fn index_of(kind: PageKind) -> usize {
    PAGES.iter().position(|p| p.kind() == kind).unwrap_or(0)
}
