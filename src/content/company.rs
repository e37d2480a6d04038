//! Fixed company facts rendered by the stats band, certification strip and resources page.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Certification {
    pub name: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Resource {
    pub title: &'static str,
    pub summary: &'static str,
    pub href: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { label: "Years in business", value: "25+" },
    Stat { label: "TEUs shipped annually", value: "40,000" },
    Stat { label: "Ports served", value: "120" },
    Stat { label: "On-time delivery", value: "98%" },
];

pub const CERTIFICATIONS: &[Certification] = &[
    Certification { name: "ISO 9001:2015", image: "/static/images/certifications/iso-9001.svg" },
    Certification { name: "C-TPAT", image: "/static/images/certifications/ctpat.svg" },
    Certification { name: "FMC Licensed NVOCC", image: "/static/images/certifications/fmc.svg" },
];

pub const RESOURCES: &[Resource] = &[
    Resource {
        title: "Incoterms 2020 Guide",
        summary: "Who pays for what, and when risk transfers, under each Incoterm.",
        href: "/static/docs/incoterms-2020.html",
    },
    Resource {
        title: "Container Specifications",
        summary: "Internal dimensions, door openings and payloads for standard equipment.",
        href: "/static/docs/container-specs.html",
    },
    Resource {
        title: "Shipping Glossary",
        summary: "Plain-language definitions of common ocean freight terms.",
        href: "/static/docs/glossary.html",
    },
    Resource {
        title: "Customs Documentation Checklist",
        summary: "The documents your broker needs before the vessel arrives.",
        href: "/static/docs/customs-checklist.html",
    },
];
