//! Literal catalog data: the event listing and the wallet's ticket collection

use super::event::Event;
use super::tickets::{OwnedTicket, TicketStatus};

const UNSPLASH: &str = "https://images.unsplash.com/";

/// Static description of a catalog entry
struct EventSeed {
    id: u32,
    title: &'static str,
    artist: &'static str,
    venue: &'static str,
    date: &'static str,
    time: &'static str,
    price: f64,
    category: &'static str,
    genre: &'static str,
    photo: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
    available: u32,
    city: &'static str,
    country: &'static str,
    venue_type: &'static str,
    time_of_day: &'static str,
}

const EVENTS: &[EventSeed] = &[
    EventSeed {
        id: 1,
        title: "Coldplay - Buenos Aires",
        artist: "Coldplay",
        venue: "Estadio River Plate",
        date: "2025-03-15",
        time: "20:00",
        price: 0.063,
        category: "Concierto",
        genre: "Rock/Pop",
        photo: "photo-1540039155733-5bb30b53aa14",
        description: "Únete a Coldplay en su gira mundial 'Music of the Spheres', con efectos LED interactivos, confeti y los grandes éxitos de la banda británica.",
        tags: &["internacional", "estadio", "rock"],
        available: 5432,
        city: "Buenos Aires",
        country: "Argentina",
        venue_type: "estadio",
        time_of_day: "noche",
    },
    EventSeed {
        id: 2,
        title: "Festival Lollapalooza 2025",
        artist: "Múltiples Artistas",
        venue: "Hipódromo de San Isidro",
        date: "2025-04-20",
        time: "12:00",
        price: 0.12,
        category: "Festival",
        genre: "Múltiple",
        photo: "photo-1459749411175-04bf5292ceea",
        description: "Tres días de música non-stop con múltiples escenarios, food trucks y un lineup internacional increíble.",
        tags: &["festival", "múltiple", "hipódromo"],
        available: 15000,
        city: "Buenos Aires",
        country: "Argentina",
        venue_type: "aire libre",
        time_of_day: "tarde",
    },
    EventSeed {
        id: 3,
        title: "Tango Show - Café Tortoni",
        artist: "Orquesta Típica Buenos Aires",
        venue: "Café Tortoni",
        date: "2025-02-28",
        time: "21:30",
        price: 0.019,
        category: "Show",
        genre: "Tango",
        photo: "photo-1578662996442-48f60103fc96",
        description: "Una auténtica experiencia de tango en el café más histórico de Buenos Aires, con cena tradicional y show de baile profesional.",
        tags: &["tango", "cultural", "histórico"],
        available: 120,
        city: "Buenos Aires",
        country: "Argentina",
        venue_type: "club",
        time_of_day: "noche",
    },
    EventSeed {
        id: 4,
        title: "Ultra Music Festival Miami",
        artist: "David Guetta, Martin Garrix",
        venue: "Bayfront Park",
        date: "2025-03-28",
        time: "17:00",
        price: 0.15,
        category: "Festival",
        genre: "Electrónica",
        photo: "photo-1470229722913-7c0e2dbbafd3",
        description: "El festival de música electrónica más prestigioso del mundo regresa a Miami con tres días de sets inolvidables.",
        tags: &["electrónica", "internacional", "playa"],
        available: 25000,
        city: "Miami",
        country: "Estados Unidos",
        venue_type: "aire libre",
        time_of_day: "tarde",
    },
    EventSeed {
        id: 5,
        title: "Ed Sheeran - Acoustic Tour",
        artist: "Ed Sheeran",
        venue: "Luna Park",
        date: "2025-05-10",
        time: "21:00",
        price: 0.05,
        category: "Concierto",
        genre: "Pop/Folk",
        photo: "photo-1493225457124-a3eb161ffa5f",
        description: "Su tour acústico más íntimo: solo una guitarra, una loop station y sus mayores éxitos en versiones nunca antes escuchadas.",
        tags: &["acústico", "íntimo", "británico"],
        available: 8500,
        city: "Buenos Aires",
        country: "Argentina",
        venue_type: "arena",
        time_of_day: "noche",
    },
    EventSeed {
        id: 6,
        title: "Tango Milonga - El Caminito",
        artist: "Orquesta Carlos Di Sarli",
        venue: "Club Gricel",
        date: "2025-02-25",
        time: "23:30",
        price: 0.01,
        category: "Show",
        genre: "Tango",
        photo: "photo-1504509546545-e000b4a62425",
        description: "Una milonga tradicional en el histórico Club Gricel, con tangos clásicos y parejas que demuestran la pasión del baile.",
        tags: &["tango", "milonga", "tradicional"],
        available: 80,
        city: "Buenos Aires",
        country: "Argentina",
        venue_type: "club",
        time_of_day: "madrugada",
    },
    EventSeed {
        id: 7,
        title: "Obra de Teatro: El Rey León",
        artist: "Compañía Musical Argentina",
        venue: "Teatro Gran Rex",
        date: "2025-03-08",
        time: "15:00",
        price: 0.035,
        category: "Teatro",
        genre: "Musical",
        photo: "photo-1507003211169-0a1dd7228f2d",
        description: "El musical más exitoso de Broadway, con más de 100 artistas en escena y las canciones de Elton John y Tim Rice.",
        tags: &["musical", "teatro", "familiar"],
        available: 1200,
        city: "Buenos Aires",
        country: "Argentina",
        venue_type: "teatro",
        time_of_day: "tarde",
    },
    EventSeed {
        id: 8,
        title: "Partido de Fútbol: Boca vs River",
        artist: "Boca Juniors vs River Plate",
        venue: "Estadio Alberto J. Armando",
        date: "2025-03-12",
        time: "17:00",
        price: 0.075,
        category: "Deportes",
        genre: "Fútbol",
        photo: "photo-1574629810360-7efbbe195018",
        description: "El superclásico del fútbol argentino en La Bombonera: la pasión, los cánticos y el color de un partido que paraliza al país.",
        tags: &["fútbol", "superclásico", "estadio"],
        available: 45000,
        city: "Buenos Aires",
        country: "Argentina",
        venue_type: "estadio",
        time_of_day: "tarde",
    },
    EventSeed {
        id: 9,
        title: "Festival de Jazz en el Parque",
        artist: "Múltiples Artistas de Jazz",
        venue: "Parque Tres de Febrero",
        date: "2025-04-05",
        time: "14:00",
        price: 0.017,
        category: "Festival",
        genre: "Jazz",
        photo: "photo-1493225457124-a3eb161ffa5f",
        description: "Un domingo de jazz al aire libre con artistas locales e internacionales en múltiples escenarios.",
        tags: &["jazz", "aire libre", "festival"],
        available: 3000,
        city: "Buenos Aires",
        country: "Argentina",
        venue_type: "aire libre",
        time_of_day: "tarde",
    },
    EventSeed {
        id: 10,
        title: "Fiesta Electrónica: Warehouse",
        artist: "DJ Snake, Skrillex",
        venue: "Club Niceto",
        date: "2025-02-29",
        time: "01:00",
        price: 0.025,
        category: "Festival",
        genre: "Electrónica",
        photo: "photo-1571266028243-d220bc1da145",
        description: "La noche electrónica más underground de la ciudad, con sonido de última generación y visuales psicodélicos.",
        tags: &["electrónica", "underground", "club"],
        available: 600,
        city: "Buenos Aires",
        country: "Argentina",
        venue_type: "club",
        time_of_day: "madrugada",
    },
    EventSeed {
        id: 11,
        title: "Concierto de Rock Nacional",
        artist: "Los Piojos Tributo",
        venue: "Estadio Obras",
        date: "2025-04-18",
        time: "20:30",
        price: 0.042,
        category: "Concierto",
        genre: "Rock Nacional",
        photo: "photo-1501386761578-eac5c94b800a",
        description: "El mejor tributo a Los Piojos con todos los clásicos que marcaron generaciones.",
        tags: &["rock nacional", "tributo", "nostalgia"],
        available: 12000,
        city: "Buenos Aires",
        country: "Argentina",
        venue_type: "estadio",
        time_of_day: "noche",
    },
    EventSeed {
        id: 12,
        title: "Festival de Folklore",
        artist: "Los Chalchaleros, Mercedes Sosa Tributo",
        venue: "Teatro Colón",
        date: "2025-05-25",
        time: "19:00",
        price: 0.038,
        category: "Festival",
        genre: "Folklore",
        photo: "photo-1514320291840-2e0a9bf2a9ae",
        description: "Una celebración de la música folklórica argentina en el prestigioso Teatro Colón.",
        tags: &["folklore", "tradicional", "cultura"],
        available: 2500,
        city: "Buenos Aires",
        country: "Argentina",
        venue_type: "teatro",
        time_of_day: "noche",
    },
    EventSeed {
        id: 13,
        title: "Stand Up Comedy Night",
        artist: "Migue Granados, Malena Pichot",
        venue: "Teatro Maipo",
        date: "2025-03-22",
        time: "22:00",
        price: 0.022,
        category: "Show",
        genre: "Comedia",
        photo: "photo-1585699062959-0c0d3b3c5b7c",
        description: "La noche de stand up más divertida de la ciudad, llena de observaciones hilarantes sobre la vida cotidiana.",
        tags: &["comedia", "stand up", "humor"],
        available: 800,
        city: "Buenos Aires",
        country: "Argentina",
        venue_type: "teatro",
        time_of_day: "noche",
    },
    EventSeed {
        id: 14,
        title: "Festival de Cumbia",
        artist: "Los Palmeras, La Delio Valdez",
        venue: "Club Ciudad de Buenos Aires",
        date: "2025-02-14",
        time: "21:00",
        price: 0.028,
        category: "Festival",
        genre: "Cumbia",
        photo: "photo-1493225457124-a3eb161ffa5f",
        description: "La fiesta de cumbia más grande del año, de la cumbia santafesina a los beats más modernos.",
        tags: &["cumbia", "baile", "popular"],
        available: 5000,
        city: "Buenos Aires",
        country: "Argentina",
        venue_type: "club",
        time_of_day: "noche",
    },
    EventSeed {
        id: 15,
        title: "Concierto de Música Clásica",
        artist: "Orquesta Filarmónica de Buenos Aires",
        venue: "Teatro Colón",
        date: "2025-04-12",
        time: "20:00",
        price: 0.045,
        category: "Concierto",
        genre: "Clásica",
        photo: "photo-1493225457124-a3eb161ffa5f",
        description: "Una velada con las sinfonías más hermosas de Beethoven y Mozart en uno de los grandes teatros de ópera del mundo.",
        tags: &["clásica", "orquesta", "elegante"],
        available: 2000,
        city: "Buenos Aires",
        country: "Argentina",
        venue_type: "teatro",
        time_of_day: "noche",
    },
    EventSeed {
        id: 16,
        title: "Festival de Hip Hop",
        artist: "Trueno, Duki, Nicki Nicole",
        venue: "Movistar Arena",
        date: "2025-03-30",
        time: "19:30",
        price: 0.065,
        category: "Festival",
        genre: "Hip Hop",
        photo: "photo-1571266028243-d220bc1da145",
        description: "Los exponentes más importantes del trap y hip hop nacional en una noche de freestyle y beats únicos.",
        tags: &["hip hop", "trap", "urbano"],
        available: 18000,
        city: "Buenos Aires",
        country: "Argentina",
        venue_type: "arena",
        time_of_day: "noche",
    },
    EventSeed {
        id: 17,
        title: "Espectáculo de Cirque du Soleil",
        artist: "Cirque du Soleil",
        venue: "Estadio Luna Park",
        date: "2025-05-08",
        time: "20:00",
        price: 0.095,
        category: "Show",
        genre: "Circo",
        photo: "photo-1507003211169-0a1dd7228f2d",
        description: "Una fusión de acrobacia, teatro y música en vivo que desafía los límites de la imaginación.",
        tags: &["circo", "acrobacia", "espectacular"],
        available: 9500,
        city: "Buenos Aires",
        country: "Argentina",
        venue_type: "arena",
        time_of_day: "noche",
    },
    EventSeed {
        id: 18,
        title: "Concierto de Reggaeton",
        artist: "Bad Bunny, J Balvin",
        venue: "Campo Argentino de Polo",
        date: "2025-04-26",
        time: "21:00",
        price: 0.125,
        category: "Concierto",
        genre: "Reggaeton",
        photo: "photo-1470229722913-7c0e2dbbafd3",
        description: "Los reyes del reggaeton en un concierto histórico lleno de hits globales y energía latina.",
        tags: &["reggaeton", "latino", "internacional"],
        available: 35000,
        city: "Buenos Aires",
        country: "Argentina",
        venue_type: "aire libre",
        time_of_day: "noche",
    },
    EventSeed {
        id: 19,
        title: "Festival de Blues",
        artist: "Memphis La Blusera, Pappo Tributo",
        venue: "Usina del Arte",
        date: "2025-03-14",
        time: "21:30",
        price: 0.033,
        category: "Festival",
        genre: "Blues",
        photo: "photo-1493225457124-a3eb161ffa5f",
        description: "Una noche dedicada al blues argentino: guitarras, armónicas y un homenaje a Pappo.",
        tags: &["blues", "guitarra", "homenaje"],
        available: 1500,
        city: "Buenos Aires",
        country: "Argentina",
        venue_type: "teatro",
        time_of_day: "noche",
    },
    EventSeed {
        id: 20,
        title: "Espectáculo de Danza Contemporánea",
        artist: "Ballet Contemporáneo del Teatro San Martín",
        venue: "Teatro San Martín",
        date: "2025-05-15",
        time: "20:30",
        price: 0.029,
        category: "Show",
        genre: "Danza",
        photo: "photo-1518611012118-696072aa579a",
        description: "Coreografías innovadoras que fusionan técnica clásica con movimientos modernos.",
        tags: &["danza", "contemporáneo", "arte"],
        available: 600,
        city: "Buenos Aires",
        country: "Argentina",
        venue_type: "teatro",
        time_of_day: "noche",
    },
];

/// The full event catalog, in catalog order
pub fn mock_events() -> Vec<Event> {
    EVENTS
        .iter()
        .map(|seed| Event {
            id: seed.id,
            title: seed.title.to_string(),
            artist: seed.artist.to_string(),
            venue: seed.venue.to_string(),
            date: seed.date.to_string(),
            time: seed.time.to_string(),
            price: seed.price,
            currency: "ETH".to_string(),
            category: seed.category.to_string(),
            genre: seed.genre.to_string(),
            image: format!(
                "{}{}?auto=format&fit=crop&w=1470&q=80",
                UNSPLASH, seed.photo
            ),
            description: seed.description.to_string(),
            tags: seed.tags.iter().map(|t| t.to_string()).collect(),
            available: seed.available,
            city: seed.city.to_string(),
            country: seed.country.to_string(),
            venue_type: seed.venue_type.to_string(),
            time_of_day: seed.time_of_day.to_string(),
        })
        .collect()
}

/// Static description of an owned ticket
struct TicketSeed {
    id: &'static str,
    event_title: &'static str,
    artist: &'static str,
    venue: &'static str,
    city: &'static str,
    date: &'static str,
    time: &'static str,
    ticket_type: &'static str,
    seat: &'static str,
    price: f64,
    purchase_date: &'static str,
    tx_hash: &'static str,
    status: TicketStatus,
    resaleable: bool,
    original_price: f64,
    fees: f64,
    used_date: Option<&'static str>,
}

const TICKETS: &[TicketSeed] = &[
    TicketSeed {
        id: "NFT-001",
        event_title: "Bad Bunny - World Hottest Tour",
        artist: "Bad Bunny",
        venue: "Estadio River Plate",
        city: "Buenos Aires, Argentina",
        date: "2025-03-15",
        time: "21:00",
        ticket_type: "VIP",
        seat: "Campo VIP - Sector A - Posición 247",
        price: 0.15,
        purchase_date: "2025-01-15",
        tx_hash: "0x8f2e4a1b3c5d6e7f8a9b0c1d2e3f4a5b6c7d8e9f0a1b2c3d4e5f6a7b8c9d0e1f",
        status: TicketStatus::Active,
        resaleable: true,
        original_price: 0.135,
        fees: 0.015,
        used_date: None,
    },
    TicketSeed {
        id: "NFT-002",
        event_title: "Dua Lipa - Future Nostalgia Tour",
        artist: "Dua Lipa",
        venue: "Movistar Arena",
        city: "Buenos Aires, Argentina",
        date: "2025-02-28",
        time: "21:30",
        ticket_type: "Platinum",
        seat: "Platea Preferencial - Fila 8 - Butaca 15",
        price: 0.12,
        purchase_date: "2025-01-10",
        tx_hash: "0x1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b",
        status: TicketStatus::Active,
        resaleable: true,
        original_price: 0.105,
        fees: 0.015,
        used_date: None,
    },
    TicketSeed {
        id: "NFT-003",
        event_title: "Coldplay - Music of the Spheres",
        artist: "Coldplay",
        venue: "Estadio Único de La Plata",
        city: "La Plata, Argentina",
        date: "2024-12-10",
        time: "20:00",
        ticket_type: "General",
        seat: "Campo General - Zona C",
        price: 0.075,
        purchase_date: "2024-10-15",
        tx_hash: "0x9f8e7d6c5b4a3928f1e0d9c8b7a6958473625149382716450593847261738495",
        status: TicketStatus::Used,
        resaleable: false,
        original_price: 0.063,
        fees: 0.012,
        used_date: Some("2024-12-10"),
    },
    TicketSeed {
        id: "NFT-004",
        event_title: "Lollapalooza Argentina 2025",
        artist: "Festival - 3 Días",
        venue: "Hipódromo de San Isidro",
        city: "San Isidro, Argentina",
        date: "2025-03-28",
        time: "12:00",
        ticket_type: "VIP",
        seat: "Pase 3 Días - VIP Experience",
        price: 0.19,
        purchase_date: "2024-12-01",
        tx_hash: "0x2c3d4e5f6a7b8c9d0e1f2a3b4c5d6e7f8a9b0c1d2e3f4a5b6c7d8e9f0a1b2c3d",
        status: TicketStatus::Active,
        resaleable: true,
        original_price: 0.17,
        fees: 0.02,
        used_date: None,
    },
    TicketSeed {
        id: "NFT-005",
        event_title: "Ultra Music Festival Argentina",
        artist: "Martin Garrix, Tiësto, David Guetta",
        venue: "Costanera Sur",
        city: "Buenos Aires, Argentina",
        date: "2024-11-15",
        time: "15:00",
        ticket_type: "General",
        seat: "General Admission - Day 1",
        price: 0.05,
        purchase_date: "2024-09-20",
        tx_hash: "0x4e5f6a7b8c9d0e1f2a3b4c5d6e7f8a9b0c1d2e3f4a5b6c7d8e9f0a1b2c3d4e5f",
        status: TicketStatus::Expired,
        resaleable: false,
        original_price: 0.042,
        fees: 0.008,
        used_date: None,
    },
    TicketSeed {
        id: "NFT-006",
        event_title: "Taylor Swift - Eras Tour",
        artist: "Taylor Swift",
        venue: "Estadio River Plate",
        city: "Buenos Aires, Argentina",
        date: "2024-11-09",
        time: "20:00",
        ticket_type: "Platinum",
        seat: "San Martín Baja - Fila 12 - Asiento 8",
        price: 0.21,
        purchase_date: "2024-08-15",
        tx_hash: "0x7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3c4d5e6f7a8b",
        status: TicketStatus::Used,
        resaleable: false,
        original_price: 0.19,
        fees: 0.02,
        used_date: Some("2024-11-09"),
    },
    TicketSeed {
        id: "NFT-007",
        event_title: "Bizarrap Session Live",
        artist: "Bizarrap",
        venue: "Vélez Sarsfield",
        city: "Buenos Aires, Argentina",
        date: "2025-05-20",
        time: "21:00",
        ticket_type: "VIP",
        seat: "Campo VIP - Acceso Backstage",
        price: 0.093,
        purchase_date: "2025-01-25",
        tx_hash: "0x3e4f5a6b7c8d9e0f1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f",
        status: TicketStatus::Active,
        resaleable: true,
        original_price: 0.076,
        fees: 0.017,
        used_date: None,
    },
    TicketSeed {
        id: "NFT-008",
        event_title: "Rock in Rio Buenos Aires",
        artist: "Foo Fighters, Red Hot Chili Peppers",
        venue: "Autódromo de Buenos Aires",
        city: "Buenos Aires, Argentina",
        date: "2024-10-05",
        time: "16:00",
        ticket_type: "General",
        seat: "Pista - Sector B",
        price: 0.04,
        purchase_date: "2024-07-10",
        tx_hash: "0x6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3c4d5e6f7a",
        status: TicketStatus::Expired,
        resaleable: false,
        original_price: 0.034,
        fees: 0.006,
        used_date: None,
    },
    TicketSeed {
        id: "NFT-009",
        event_title: "Tini - Un Mechón de Pelo Tour",
        artist: "Tini",
        venue: "Luna Park",
        city: "Buenos Aires, Argentina",
        date: "2025-04-12",
        time: "21:00",
        ticket_type: "Platinum",
        seat: "Platea Premium - Fila 5 - Asiento 22",
        price: 0.063,
        purchase_date: "2025-01-18",
        tx_hash: "0x5d6e7f8a9b0c1d2e3f4a5b6c7d8e9f0a1b2c3d4e5f6a7b8c9d0e1f2a3b4c5d6e",
        status: TicketStatus::Active,
        resaleable: true,
        original_price: 0.05,
        fees: 0.013,
        used_date: None,
    },
    TicketSeed {
        id: "NFT-010",
        event_title: "Paulo Londra - Back to the Game",
        artist: "Paulo Londra",
        venue: "Estadio Malvinas Argentinas",
        city: "Mendoza, Argentina",
        date: "2025-06-15",
        time: "20:30",
        ticket_type: "General",
        seat: "Tribuna Norte - Sector 12",
        price: 0.036,
        purchase_date: "2025-01-22",
        tx_hash: "0x8c9d0e1f2a3b4c5d6e7f8a9b0c1d2e3f4a5b6c7d8e9f0a1b2c3d4e5f6a7b8c9d",
        status: TicketStatus::Active,
        resaleable: true,
        original_price: 0.03,
        fees: 0.006,
        used_date: None,
    },
];

/// Tickets held by the connected wallet
pub fn mock_owned_tickets() -> Vec<OwnedTicket> {
    TICKETS
        .iter()
        .map(|seed| OwnedTicket {
            id: seed.id.to_string(),
            event_title: seed.event_title.to_string(),
            artist: seed.artist.to_string(),
            venue: seed.venue.to_string(),
            city: seed.city.to_string(),
            date: seed.date.to_string(),
            time: seed.time.to_string(),
            ticket_type: seed.ticket_type.to_string(),
            seat: seed.seat.to_string(),
            price: seed.price,
            purchase_date: seed.purchase_date.to_string(),
            tx_hash: seed.tx_hash.to_string(),
            status: seed.status,
            resaleable: seed.resaleable,
            original_price: seed.original_price,
            fees: seed.fees,
            used_date: seed.used_date.map(str::to_string),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_twenty_unique_events() {
        let events = mock_events();
        assert_eq!(events.len(), 20);

        let ids: HashSet<u32> = events.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_catalog_images_point_at_cdn() {
        for event in mock_events() {
            assert!(event.image.starts_with(UNSPLASH), "{}", event.image);
        }
    }

    #[test]
    fn test_owned_tickets_loaded() {
        let tickets = mock_owned_tickets();
        assert_eq!(tickets.len(), 10);
        assert!(tickets.iter().all(|t| t.tx_hash.starts_with("0x")));
    }
}
