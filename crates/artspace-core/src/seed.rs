//! # Seed Catalog
//!
//! Fixed catalog data for the storefront. There is no backend in scope, so
//! the marketplace ships with the roster and portfolio baked in; a future
//! catalog service can replace [`default_catalog`] without touching
//! consumers, which only ever see [`Catalog`].

use crate::catalog::{Artist, Artwork, Catalog};
use crate::theme::ArtistTheme;

/// Builds the seeded marketplace catalog: the artist roster and their
/// portfolio of artworks.
pub fn default_catalog() -> Catalog {
    Catalog {
        artists: default_artists(),
        artworks: default_artworks(),
    }
}

fn artist(
    id: &str,
    name: &str,
    handle: &str,
    photo: &str,
    theme: ArtistTheme,
    bio: &str,
    specialty: &str,
    commission_rate_cents: Option<i64>,
) -> Artist {
    Artist {
        id: id.to_string(),
        name: name.to_string(),
        handle: handle.to_string(),
        instagram: format!("https://instagram.com/{}", handle.trim_start_matches('@')),
        photo_url: photo.to_string(),
        theme,
        bio: bio.to_string(),
        specialty: specialty.to_string(),
        commission_rate_cents,
    }
}

fn default_artists() -> Vec<Artist> {
    vec![
        artist(
            "1",
            "A Fase",
            "@afasesantos",
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=200&h=200&fit=crop",
            ArtistTheme::Street,
            "A essência do graffiti santista traduzida em letras e formas que dominam o cenário urbano da Baixada.",
            "Street Writing",
            Some(80_000), // $800.00 per m²
        ),
        artist(
            "2",
            "Cadumen",
            "@cadumen",
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=200&h=200&fit=crop",
            ArtistTheme::Mural,
            "Muralismo que conecta a natureza e o abstrato, transformando espaços em experiências visuais orgânicas.",
            "Muralismo",
            Some(120_000),
        ),
        artist(
            "3",
            "Zezão",
            "@zezao_sp",
            "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=200&h=200&fit=crop",
            ArtistTheme::Abstract,
            "Lenda mundial da street art, conhecido por dar vida e cor aos lugares mais esquecidos e subterrâneos.",
            "Graffiti Abstrato",
            None,
        ),
        artist(
            "4",
            "Val Lehmann",
            "@val_lehmann",
            "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=200&h=200&fit=crop",
            ArtistTheme::Classic,
            "A delicadeza e força da arte que transita entre o design e a intervenção urbana contemporânea.",
            "Fine Art",
            Some(95_000),
        ),
        artist(
            "5",
            "Sérgio Free",
            "@sergiofreearte",
            "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?w=200&h=200&fit=crop",
            ArtistTheme::Pop,
            "Alegria e cores vibrantes que personificam o espírito da arte de rua brasileira em cada traço.",
            "Pop Art",
            Some(60_000),
        ),
        artist(
            "6",
            "Paulo Medo",
            "@paulomedo",
            "https://images.unsplash.com/photo-1519085360753-af0119f7cbe7?w=200&h=200&fit=crop",
            ArtistTheme::Minimal,
            "Traços marcantes e narrativa visual potente que desafiam o olhar comum sobre a cidade.",
            "Ilustração",
            None,
        ),
        artist(
            "7",
            "Victor Gabriel",
            "@institutovictorgabriel",
            "https://images.unsplash.com/photo-1539571696357-5a69c17a67c6?w=200&h=200&fit=crop",
            ArtistTheme::Neon,
            "Expressão jovem e talento nato que une o legado familiar à inovação da arte contemporânea.",
            "Nova Geração",
            Some(70_000),
        ),
        artist(
            "8",
            "Costa Villar",
            "@jdacostavillar",
            "https://images.unsplash.com/photo-1507591064344-4c6ce005b128?w=200&h=200&fit=crop",
            ArtistTheme::Classic,
            "Mestre da composição, trazendo a sofisticação da arte de galeria para o contexto da ArtSpace.",
            "Fine Art",
            None,
        ),
        artist(
            "9",
            "Dicart",
            "@adrianodicart",
            "https://images.unsplash.com/photo-1531746020798-e6953c6e8e04?w=200&h=200&fit=crop",
            ArtistTheme::Realism,
            "O realismo e a técnica apurada transformando superfícies em janelas para novas percepções.",
            "Realismo",
            Some(110_000),
        ),
        artist(
            "10",
            "Ozill",
            "@ozill",
            "https://images.unsplash.com/photo-1534030347209-467a5b0ad3e6?w=200&h=200&fit=crop",
            ArtistTheme::Raw,
            "Estilo autêntico e misterioso, trazendo a força bruta e a verdade das ruas para o acervo internacional.",
            "Street Raw",
            None,
        ),
    ]
}

fn default_artworks() -> Vec<Artwork> {
    vec![
        Artwork {
            id: "1".to_string(),
            artist_id: "1".to_string(),
            title: "Cidade Neon".to_string(),
            image_url:
                "https://images.unsplash.com/photo-1541701494587-cb58502866ab?w=600&h=800&fit=crop"
                    .to_string(),
            price_original_cents: 450_000,
            price_print_cents: 8_900,
            price_mug_cents: Some(2_400),
            price_pen_cents: Some(900),
            has_custom_service: true,
        },
        Artwork {
            id: "2".to_string(),
            artist_id: "1".to_string(),
            title: "Reflexos Urbanos".to_string(),
            image_url:
                "https://images.unsplash.com/photo-1579783902614-a3fb3927b6a5?w=600&h=500&fit=crop"
                    .to_string(),
            price_original_cents: 320_000,
            price_print_cents: 6_900,
            price_mug_cents: Some(2_400),
            price_pen_cents: None,
            has_custom_service: true,
        },
        Artwork {
            id: "3".to_string(),
            artist_id: "3".to_string(),
            title: "Abstrato #42".to_string(),
            image_url:
                "https://images.unsplash.com/photo-1549490349-8643362247b5?w=600&h=700&fit=crop"
                    .to_string(),
            price_original_cents: 280_000,
            price_print_cents: 5_900,
            price_mug_cents: None,
            price_pen_cents: None,
            has_custom_service: false,
        },
        Artwork {
            id: "4".to_string(),
            artist_id: "6".to_string(),
            title: "Geometria Infinita".to_string(),
            image_url:
                "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?w=600&h=600&fit=crop"
                    .to_string(),
            price_original_cents: 550_000,
            price_print_cents: 9_900,
            price_mug_cents: Some(2_600),
            price_pen_cents: Some(1_100),
            has_custom_service: false,
        },
        Artwork {
            id: "5".to_string(),
            artist_id: "4".to_string(),
            title: "Cores do Porto".to_string(),
            image_url:
                "https://images.unsplash.com/photo-1578301978693-85fa9c0320b9?w=600&h=450&fit=crop"
                    .to_string(),
            price_original_cents: 620_000,
            price_print_cents: 7_900,
            price_mug_cents: None,
            price_pen_cents: None,
            has_custom_service: true,
        },
        Artwork {
            id: "6".to_string(),
            artist_id: "7".to_string(),
            title: "Digital Dreams".to_string(),
            image_url:
                "https://images.unsplash.com/photo-1558591710-4b4a1ae0f04d?w=600&h=900&fit=crop"
                    .to_string(),
            price_original_cents: 380_000,
            price_print_cents: 8_900,
            price_mug_cents: Some(2_400),
            price_pen_cents: Some(900),
            has_custom_service: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_artwork_references_a_seeded_artist() {
        let catalog = default_catalog();
        for artwork in &catalog.artworks {
            assert!(
                catalog.artist(&artwork.artist_id).is_some(),
                "artwork {} references missing artist {}",
                artwork.id,
                artwork.artist_id
            );
        }
    }

    #[test]
    fn test_custom_service_artworks_have_commissioned_artists() {
        // A piece offered as a wall commission must belong to an artist
        // with a commission rate, or quoting would be impossible.
        let catalog = default_catalog();
        for artwork in catalog.artworks.iter().filter(|a| a.has_custom_service) {
            let artist = catalog.artist(&artwork.artist_id).unwrap();
            assert!(
                artist.takes_commissions(),
                "artwork {} offers custom service but artist {} has no rate",
                artwork.id,
                artist.id
            );
        }
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let catalog = default_catalog();
        for (i, a) in catalog.artists.iter().enumerate() {
            assert!(catalog.artists.iter().skip(i + 1).all(|b| b.id != a.id));
        }
        for (i, a) in catalog.artworks.iter().enumerate() {
            assert!(catalog.artworks.iter().skip(i + 1).all(|b| b.id != a.id));
        }
    }

    #[test]
    fn test_all_prices_positive() {
        let catalog = default_catalog();
        for artwork in &catalog.artworks {
            assert!(artwork.price_original_cents > 0);
            assert!(artwork.price_print_cents > 0);
            if let Some(mug) = artwork.price_mug_cents {
                assert!(mug > 0);
            }
            if let Some(pen) = artwork.price_pen_cents {
                assert!(pen > 0);
            }
        }
    }
}
