use super::ServiceOffering;

pub(super) fn catalog() -> Vec<ServiceOffering> {
    vec![
        ServiceOffering {
            id: 1,
            title: "Full Container Load (FCL)",
            slug: "fcl",
            short_description: "Dedicated 20' and 40' containers for shippers who fill a box.",
            full_description: "Our FCL service gives you exclusive use of a container from origin to destination. \
                We book space with top-tier carriers on every major trade lane, manage the paperwork, and \
                track your cargo until it is released at the destination terminal.",
            features: vec![
                "Weekly sailings on transpacific and transatlantic lanes",
                "20', 40' and 40' high-cube equipment",
                "Door-to-door or port-to-port options",
                "Real-time container tracking",
            ],
            icon: "container",
            image: "/static/images/services/fcl.svg",
            equipment: Some(vec!["20' Dry", "40' Dry", "40' High Cube", "45' High Cube"]),
            certifications: None,
        },
        ServiceOffering {
            id: 2,
            title: "Less than Container Load (LCL)",
            slug: "lcl",
            short_description: "Share container space and pay only for the volume you ship.",
            full_description: "LCL consolidation lets smaller shipments move on the same schedule as full \
                containers. We consolidate at our partner CFS facilities and deconsolidate at destination, \
                keeping handling to a minimum.",
            features: vec![
                "Fixed weekly consolidation services",
                "Pay per cubic meter",
                "Bonded CFS handling at origin and destination",
                "Ideal for shipments from 1 to 15 CBM",
            ],
            icon: "boxes",
            image: "/static/images/services/lcl.svg",
            equipment: None,
            certifications: None,
        },
        ServiceOffering {
            id: 3,
            title: "Refrigerated Cargo",
            slug: "reefer",
            short_description: "Temperature-controlled containers for perishables and pharmaceuticals.",
            full_description: "Our reefer program covers fresh produce, frozen goods and temperature-sensitive \
                pharmaceuticals. Every container is pre-tripped, monitored in transit, and backed by a \
                documented cold-chain process.",
            features: vec![
                "Set points from -30°C to +30°C",
                "Continuous remote temperature monitoring",
                "Controlled atmosphere available",
                "GDP-compliant handling for pharmaceuticals",
            ],
            icon: "snowflake",
            image: "/static/images/services/reefer.svg",
            equipment: Some(vec!["20' Reefer", "40' High Cube Reefer"]),
            certifications: Some(vec!["GDP", "HACCP"]),
        },
        ServiceOffering {
            id: 4,
            title: "Project & Breakbulk Cargo",
            slug: "project-cargo",
            short_description: "Out-of-gauge and heavy-lift shipments planned end to end.",
            full_description: "From turbines to transformers, our project team engineers the move: route \
                surveys, lashing plans, special equipment and permits, coordinated with the vessel and the \
                terminal.",
            features: vec![
                "Flat rack and open top equipment",
                "Heavy-lift and breakbulk vessel charters",
                "Route surveys and lashing plans",
                "Dedicated project manager",
            ],
            icon: "crane",
            image: "/static/images/services/project-cargo.svg",
            equipment: Some(vec!["20' Flat Rack", "40' Flat Rack", "40' Open Top"]),
            certifications: None,
        },
        ServiceOffering {
            id: 5,
            title: "Customs Brokerage",
            slug: "customs-brokerage",
            short_description: "Licensed brokers who keep your cargo moving through the border.",
            full_description: "Our licensed customs brokers file entries, classify goods, and manage duties \
                and fees so shipments clear without surprises. We also handle ISF filings and bonds.",
            features: vec![
                "ISF (10+2) filing",
                "Tariff classification and duty management",
                "Continuous and single-entry bonds",
                "Partner government agency coordination",
            ],
            icon: "file-check",
            image: "/static/images/services/customs.svg",
            equipment: None,
            certifications: Some(vec!["Licensed Customs Broker", "C-TPAT"]),
        },
        ServiceOffering {
            id: 6,
            title: "Warehousing & Distribution",
            slug: "warehousing",
            short_description: "Port-adjacent storage, transloading and final-mile delivery.",
            full_description: "Our warehouses near the ports of Los Angeles and Long Beach handle \
                transloading, cross-docking and inventory storage, with drayage and final-mile delivery \
                scheduled from the same desk.",
            features: vec![
                "Transloading and cross-docking",
                "Bonded and general storage",
                "Pick, pack and labeling",
                "Drayage and final-mile delivery",
            ],
            icon: "warehouse",
            image: "/static/images/services/warehousing.svg",
            equipment: None,
            certifications: Some(vec!["ISO 9001:2015"]),
        },
    ]
}
