//! The static POI taxonomy: six coarse super-categories used to bucket
//! points of interest for narration. The membership lists are data, not
//! logic; the matching algorithm doesn't care what's in them.

use std::collections::HashSet;
use std::fmt;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::{Feature, FeatureCollection};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum SuperCategory {
    Information,
    Object,
    Place,
    Landmark,
    Mobility,
    Safety,
}

impl SuperCategory {
    pub const ALL: [SuperCategory; 6] = [
        SuperCategory::Information,
        SuperCategory::Object,
        SuperCategory::Place,
        SuperCategory::Landmark,
        SuperCategory::Mobility,
        SuperCategory::Safety,
    ];

    /// None for a category name the taxonomy doesn't know.
    pub fn parse(name: &str) -> Option<SuperCategory> {
        match name {
            "information" => Some(SuperCategory::Information),
            "object" => Some(SuperCategory::Object),
            "place" => Some(SuperCategory::Place),
            "landmark" => Some(SuperCategory::Landmark),
            "mobility" => Some(SuperCategory::Mobility),
            "safety" => Some(SuperCategory::Safety),
            _ => None,
        }
    }

    fn members(self) -> &'static HashSet<&'static str> {
        match self {
            SuperCategory::Information => &INFORMATION_SET,
            SuperCategory::Object => &OBJECT_SET,
            SuperCategory::Place => &PLACE_SET,
            SuperCategory::Landmark => &LANDMARK_SET,
            SuperCategory::Mobility => &MOBILITY_SET,
            SuperCategory::Safety => &SAFETY_SET,
        }
    }

    fn matches(self, feature: &Feature) -> bool {
        let set = self.members();
        feature
            .feature_type
            .as_deref()
            .map_or(false, |x| set.contains(x))
            || feature
                .feature_value
                .as_deref()
                .map_or(false, |x| set.contains(x))
    }
}

impl fmt::Display for SuperCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            SuperCategory::Information => "information",
            SuperCategory::Object => "object",
            SuperCategory::Place => "place",
            SuperCategory::Landmark => "landmark",
            SuperCategory::Mobility => "mobility",
            SuperCategory::Safety => "safety",
        };
        write!(f, "{}", name)
    }
}

/// The subset of a POI collection whose feature_type or feature_value belongs
/// to the super-category. Each matching feature appears exactly once.
pub fn filter_by_super_category(
    category: SuperCategory,
    pois: &FeatureCollection,
) -> FeatureCollection {
    let mut result = FeatureCollection::new();
    for feature in pois {
        if category.matches(feature) {
            result.push(feature.clone());
        }
    }
    result
}

lazy_static! {
    static ref INFORMATION_SET: HashSet<&'static str> = INFORMATION.iter().copied().collect();
    static ref OBJECT_SET: HashSet<&'static str> = OBJECT.iter().copied().collect();
    static ref PLACE_SET: HashSet<&'static str> = PLACE.iter().copied().collect();
    static ref LANDMARK_SET: HashSet<&'static str> = LANDMARK.iter().copied().collect();
    static ref MOBILITY_SET: HashSet<&'static str> = MOBILITY.iter().copied().collect();
    static ref SAFETY_SET: HashSet<&'static str> = SAFETY.iter().copied().collect();
}

const INFORMATION: &[&str] = &[
    "information",
    "assembly_point",
    "fire_extinguisher",
    "defibrillator",
    "guide",
    "water",
    "fire_hose",
    "fire_flapper",
    "information_point",
    "wetland",
    "mud",
    "access_point",
    "life_ring",
    "generic_info",
];

const OBJECT: &[&str] = &[
    "turntable",
    "survey_point",
    "snow_net",
    "silo",
    "mast",
    "bird_hide",
    "transformer_tower",
    "generic_object",
    "waste_basket",
    "post_box",
    "signal",
    "rock",
    "kiln",
    "crane",
    "rune_stone",
    "milestone",
    "lifeguard_platform",
    "water_tank",
    "sty",
    "navigationaid",
    "vending_machine",
    "terminal",
    "traverser",
    "water_tap",
    "water_well",
    "petroleum_well",
    "cross",
    "gallows",
    "speed_camera",
    "siren",
    "pylon",
    "mineshaft",
    "flagpole",
    "optical_telegraph",
    "cannon",
    "boundary_stone",
    "street_lamp",
    "shed",
    "traffic_cones",
    "firepit",
    "bench",
    "grit_bin",
    "stone",
    "surveillance",
    "street_cabinet",
    "monitoring_station",
    "wayside_shrine",
    "wayside_cross",
    "tomb",
    "traffic_signals",
    "fire_hydrant",
    "hut",
    "static_caravan",
    "bollard",
    "block",
    "waste_disposal",
    "photo_booth",
    "bbq",
    "telephone",
];

const PLACE: &[&str] = &[
    "shop",
    "newsagent",
    "anime",
    "musical_instrument",
    "vacuum_cleaner",
    "mobile_phone",
    "carpet",
    "trade",
    "garden_centre",
    "florist",
    "fireplace",
    "massage",
    "herbalist",
    "bag",
    "pastry",
    "deli",
    "beverages",
    "alcohol",
    "substation",
    "travel_agent",
    "research",
    "newspaper",
    "ammunition",
    "wildlife_hide",
    "playground",
    "watchmaker",
    "tinsmith",
    "sun_protection",
    "sculptor",
    "metal_construction",
    "handicraft",
    "cowshed",
    "cabin",
    "barn",
    "warehouse",
    "houseboat",
    "book_store",
    "generic_place",
    "hunting_stand",
    "game_feeding",
    "crypt",
    "animal_shelter",
    "animal_boarding",
    "blood_donation",
    "nursing_home",
    "dentist",
    "baby_hatch",
    "language_school",
    "public_bookcase",
    "biergarten",
    "running",
    "glaziery",
    "garages",
    "retail",
    "office",
    "hotel",
    "camp_site",
    "rugby_league",
    "roller_skating",
    "multi",
    "ice_hockey",
    "hapkido",
    "croquet",
    "cricket",
    "cockfighting",
    "boxing",
    "bmx",
    "billiards",
    "toys",
    "pyrotechnics",
    "laundry",
    "funeral_directors",
    "dry_cleaning",
    "copyshop",
    "chalet",
    "apartment",
    "water_ski",
    "water_polo",
    "table_soccer",
    "table_tennis",
    "skateboard",
    "sailing",
    "safety_training",
    "rowing",
    "model_aerodrome",
    "korfball",
    "ice_stock",
    "gymnastics",
    "football",
    "field_hockey",
    "equestrian",
    "cycling",
    "curling",
    "cricket_nets",
    "cliff_diving",
    "boules",
    "bobsleigh",
    "baseball",
    "aikido",
    "10pin",
    "weapons",
    "pet",
    "money_lender",
    "gift",
    "books",
    "bookmaker",
    "photo",
    "craft",
    "motorcycle",
    "hunting",
    "window_blind",
    "curtain",
    "antiques",
    "paint",
    "tattoo",
    "nutrition_supplements",
    "hearing_aids",
    "cosmetics",
    "watches",
    "jewelry",
    "boutique",
    "baby_goods",
    "tea",
    "pasta",
    "coffee",
    "quango",
    "political_party",
    "association",
    "architect",
    "advertising_agency",
    "summer_camp",
    "pitch",
    "dance",
    "amusement_arcade",
    "adult_gaming_centre",
    "window_construction",
    "upholsterer",
    "shoemaker",
    "sawmill",
    "pottery",
    "key_cutter",
    "hvac",
    "clockmaker",
    "carpenter",
    "builder",
    "bookbinder",
    "boatbuilder",
    "brewery",
    "blacksmith",
    "basket_maker",
    "greenhouse",
    "farm_auxiliary",
    "civic",
    "bungalow",
    "detached",
    "hair_dresser",
    "clothing_store",
    "user",
    "dojo",
    "nightclub",
    "community_centre",
    "brothel",
    "veterinary",
    "social_facility",
    "clinic",
    "charging_station",
    "kindergarten",
    "ice_cream",
    "fast_food",
    "commercial",
    "canoe",
    "scuba_diving",
    "swimming_pool",
    "fishing",
    "optician",
    "confectionery",
    "bunker",
    "sleeping_pods",
    "picnic_site",
    "motel",
    "guest_house",
    "wrestling",
    "toboggan",
    "skiing",
    "rc_car",
    "paddle_tennis",
    "hockey",
    "fencing",
    "bowls",
    "badminton",
    "archery",
    "american_football",
    "travel_agency",
    "tobacco",
    "e-cigarette",
    "video",
    "car_repair",
    "hifi",
    "lamps",
    "kitchen",
    "interior_decoration",
    "houseware",
    "erotic",
    "beauty",
    "wine",
    "dairy",
    "cheese",
    "bakery",
    "telecommunication",
    "tax",
    "real_estate_agent",
    "notary",
    "ngo",
    "lawyer",
    "it",
    "foundation",
    "employment_agency",
    "educational_institution",
    "adoption_agency",
    "miniature_golf",
    "garden",
    "building",
    "winery",
    "tiler",
    "chimney_sweeper",
    "stand_builder",
    "saddler",
    "plumber",
    "plasterer",
    "painter",
    "jeweller",
    "floorer",
    "distillery",
    "carpet_layer",
    "beekeeper",
    "public",
    "dormitory",
    "apartments",
    "internet_cafe",
    "shoe_shop",
    "generic_shop",
    "coffee_shop",
    "recycling",
    "coworking_space",
    "stripclub",
    "ev_charging",
    "restaurant",
    "pub",
    "obstacle_course",
    "volleyball",
    "tennis",
    "soccer",
    "shooting",
    "rugby_union",
    "orienteering",
    "netball",
    "motor",
    "kitesurfing",
    "karting",
    "judo",
    "horseshoes",
    "handball",
    "golf",
    "gaelic_games",
    "diving",
    "darts",
    "climbing_adventure",
    "basketball",
    "bandy",
    "australian_football",
    "9pin",
    "vacant",
    "lottery",
    "trophy",
    "music",
    "games",
    "tyres",
    "sports",
    "outdoor",
    "car",
    "electronics",
    "computer",
    "furniture",
    "candles",
    "hardware",
    "gas",
    "energy",
    "doityourself",
    "bathroom_furnishing",
    "medical_supply",
    "variety_store",
    "second_hand",
    "charity",
    "fashion",
    "fabric",
    "clothes",
    "convenience",
    "butcher",
    "water_utility",
    "realtor",
    "company",
    "accountant",
    "bunker_silo",
    "hackerspace",
    "lifeguard_base",
    "roofer",
    "rigger",
    "parquet_layer",
    "gardener",
    "stable",
    "garage",
    "transportation",
    "house",
    "helipad",
    "apron",
    "consumer_electronics_store",
    "speciality_store",
    "defined",
    "shower",
    "sauna",
    "gym",
    "crematorium",
    "gambling",
    "bank",
    "music_school",
    "cafe",
    "bar",
    "farm",
    "bicycle",
    "tailor",
    "locksmith",
    "industrial",
    "wilderness_hut",
    "hostel",
    "caravan_site",
    "weightlifting",
    "taekwondo",
    "swimming",
    "surfing",
    "skating",
    "racquet",
    "pelota",
    "paragliding",
    "parachuting",
    "motocross",
    "ice_skating",
    "horse_racing",
    "dog_racing",
    "climbing",
    "chess",
    "canadian_football",
    "beachvolleyball",
    "base",
    "athletics",
    "pawnbroker",
    "ticket",
    "stationery",
    "video_games",
    "model",
    "frame",
    "art",
    "car_parts",
    "radiotechnics",
    "bed",
    "garden_furniture",
    "electrical",
    "perfumery",
    "hairdresser",
    "drugstore",
    "shoes",
    "leather",
    "general",
    "seafood",
    "organic",
    "greengrocer",
    "chocolate",
    "brewing_supplies",
    "tax_advisor",
    "private_investigator",
    "government",
    "forestry",
    "estate_agent",
    "spring",
    "golf_course",
    "ses_station",
    "lifeguard_place",
    "stonemason",
    "scaffolder",
    "sailmaker",
    "photographic_laboratory",
    "photographer",
    "insulation",
    "electrician",
    "dressmaker",
    "caterer",
    "terrace",
    "toy_shop",
    "dive_centre",
    "swingerclub",
    "doctors",
    "car_wash",
    "driving_school",
    "free_flying",
    "religion",
    "kiosk",
    "residential",
    "food",
];

const LANDMARK: &[&str] = &[
    "waterfall",
    "boatyard",
    "theme_park",
    "roundhouse",
    "generator",
    "beach",
    "naval_base",
    "works",
    "water_works",
    "telescope",
    "pier",
    "observatory",
    "reservoir",
    "monument",
    "battlefield",
    "post_office",
    "planetarium",
    "social_centre",
    "prison",
    "courthouse",
    "bridge",
    "hangar",
    "tower",
    "attraction",
    "zoo",
    "gallery",
    "artwork",
    "alpine_hut",
    "plant",
    "insurance",
    "airfield",
    "water_tower",
    "pumping_station",
    "hot_water_tank",
    "campanile",
    "sports_centre",
    "beach_resort",
    "village_green",
    "ship",
    "memorial",
    "synagogue",
    "mosque",
    "chapel",
    "cathedral",
    "train_terminal",
    "college",
    "arts_centre",
    "ranger_station",
    "hospital",
    "fountain",
    "track",
    "conference_centre",
    "viewpoint",
    "supermarket",
    "peak",
    "storage_tank",
    "lighthouse",
    "beacon",
    "park",
    "port",
    "archaeological_site",
    "train_station",
    "shrine",
    "church",
    "historic_monument",
    "generic_landmark",
    "tourism_museum",
    "register_office",
    "grave_yard",
    "school",
    "marketplace",
    "fire_station",
    "ruins",
    "weir",
    "museum",
    "mall",
    "volcano",
    "hot_spring",
    "glacier",
    "wastewater_plant",
    "offshore_platform",
    "gasometer",
    "water_park",
    "bandstand",
    "wreck",
    "pillory",
    "monastery",
    "locomotive",
    "fort",
    "services",
    "lifeguard_tower",
    "temple",
    "national_park",
    "heliport",
    "public_park",
    "department_store",
    "studio",
    "public_building",
    "place_of_worship",
    "clock",
    "casino",
    "ferry_terminal",
    "stadium",
    "dam",
    "dock",
    "geyser",
    "bay",
    "barracks",
    "windmill",
    "watermill",
    "communications_tower",
    "swimming_area",
    "slipway",
    "nature_reserve",
    "marina",
    "ice_rink",
    "manor",
    "city_gate",
    "castle",
    "aircraft",
    "digester",
    "sally_port",
    "aerodrome",
    "shopping_mall",
    "cinema",
    "rescue_station",
    "airport",
    "theatre",
    "library",
    "university",
    "townhall",
    "police",
    "embassy",
    "bus_station",
    "station",
];

const MOBILITY: &[&str] = &[
    "toll_booth",
    "lift_gate",
    "lift",
    "steps",
    "unmanaged_crossing",
    "pharmacy",
    "kneipp_water_cure",
    "food_court",
    "toilets",
    "chemist",
    "checkpoint",
    "dog_park",
    "kissing_gate",
    "fuel",
    "car_rental",
    "pedestrianised_area",
    "escalator",
    "shelter",
    "water_point",
    "subway_entrance",
    "cave_entrance",
    "turnstile",
    "swing_gate",
    "stile",
    "car_sharing",
    "customer_service",
    "watering_place",
    "atm",
    "drinking_water",
    "platform",
    "crossing",
    "elevator",
    "horse_stile",
    "bureau_de_change",
    "stairs",
    "bicycle_rental",
    "bicycle_parking",
    "bus_stop",
    "hampshire_gate",
    "full-height_turnstile",
    "boat_sharing",
    "help_point",
    "open_space",
    "spending_area",
    "bicycle_repair_station",
    "taxi",
    "gate",
];

const SAFETY: &[&str] = &[
    "motorcycle_barrier",
    "kent_carriage_gap",
    "shared_space",
    "construction",
    "cliff",
    "training_area",
    "log",
    "jersey_barrier",
    "cycle_barrier",
    "construction_site",
    "ridge",
    "nuclear_explosion_site",
    "dyke",
    "sump_buster",
    "rope",
    "debris",
    "road_works",
    "lock_gate",
    "sinkhole",
    "range",
    "ambulance_station",
    "spikes",
    "cattle_grid",
    "generic_hazard",
    "contact_line",
    "danger_area",
    "chain",
    "parking_entrance",
    "parking_space",
    "parking",
    "motorcycle_parking",
];
