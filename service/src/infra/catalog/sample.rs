//! Sample [`Property`]s bundled with the application.

use common::{Money, Percent};

use crate::domain::{
    property::{Address, Amenity, ImageUrl, Name, Offers, Rating, Review, Slug},
    Property,
};

/// Raw sample [`Review`] data: author, avatar, rating, comment and date.
type RawReview = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
);

/// Returns all the sample [`Property`]s.
pub(super) fn properties() -> Vec<Property> {
    vec![
        property(
            "Modern Villa with Pool",
            "4.9",
            ("Cape Town", "South Africa"),
            "Experience luxury living in this stunning modern villa featuring \
             a private infinity pool with breathtaking ocean views. The open \
             floor plan blends indoor and outdoor living.",
            "/images/villa1.jpg",
            &["/images/villa2.jpg", "/images/villa3.jpg"],
            &[
                "Top Villa",
                "Private Pool",
                "Free Parking",
                "Free WiFi",
                "Self Checkin",
            ],
            200,
            &[
                (
                    "Alice Johnson",
                    "/avatars/alice.jpg",
                    "5",
                    "Amazing stay! The pool was incredible and the views \
                     were breathtaking.",
                    "March 2024",
                ),
                (
                    "John Smith",
                    "/avatars/john.jpg",
                    "4",
                    "Great location and beautiful property. Would definitely \
                     come back.",
                    "February 2024",
                ),
            ],
            "Superhost with 5 years of hosting experience. Loves sharing \
             local tips about the best beaches and restaurants.",
            (4, 3, 8),
            None,
        ),
        property(
            "Beachfront Bungalow",
            "4.7",
            ("Mombasa", "Kenya"),
            "A cozy bungalow steps away from the white sand beach, with a \
             shaded veranda facing the Indian Ocean.",
            "/images/bungalow1.jpg",
            &["/images/bungalow2.jpg"],
            &["Beachfront", "Free WiFi", "Pet Friendly"],
            145,
            &[(
                "Sarah Miller",
                "/avatars/sarah.jpg",
                "4",
                "Lovely property right on the beach. The sunsets were \
                 unforgettable.",
                "January 2024",
            )],
            "Local family running beach cottages for two generations.",
            (2, 1, 4),
            Some("15"),
        ),
        property(
            "Mountain Chalet",
            "4.8",
            ("Zermatt", "Switzerland"),
            "Traditional timber chalet with a roaring fireplace and a \
             panoramic view of the Matterhorn.",
            "/images/chalet1.jpg",
            &["/images/chalet2.jpg", "/images/chalet3.jpg"],
            &["Mountain View", "Fireplace", "Free Parking"],
            1250,
            &[(
                "Alex Johnson",
                "/avatars/alex.jpg",
                "5",
                "Perfect for a winter getaway. The host was very helpful.",
                "December 2023",
            )],
            "Former ski instructor who knows every slope in the valley.",
            (5, 4, 10),
            None,
        ),
        property(
            "City Center Loft",
            "4.5",
            ("Lisbon", "Portugal"),
            "Bright loft in a restored 19th century building, within walking \
             distance of the old town.",
            "/images/loft1.jpg",
            &[],
            &["City Center", "Self Checkin", "Free WiFi", "Historical"],
            95,
            &[],
            "Architect who restored the building and lives next door.",
            (1, 1, 2),
            None,
        ),
        property(
            "Safari Lodge",
            "4.6",
            ("Arusha", "Tanzania"),
            "Eco lodge on the edge of the national park with guided game \
             drives departing every morning.",
            "/images/lodge1.jpg",
            &["/images/lodge2.jpg"],
            &["Safari", "Countryside", "Free Parking"],
            320,
            &[
                (
                    "Daniel Okafor",
                    "/avatars/daniel.jpg",
                    "5",
                    "Seeing elephants from the terrace was a dream come true.",
                    "August 2023",
                ),
                (
                    "Maria Garcia",
                    "/avatars/maria.jpg",
                    "4.5",
                    "Wonderful guides and delicious food.",
                    "July 2023",
                ),
            ],
            "Conservationist hosting travellers in the bush since 2010.",
            (3, 2, 6),
            Some("10"),
        ),
        property(
            "Riverside Cottage",
            "4.4",
            ("Bath", "United Kingdom"),
            "Stone cottage on the riverbank with a walled garden and a wood \
             burning stove.",
            "/images/cottage1.jpg",
            &["/images/cottage2.jpg"],
            &["Riverfront", "Countryside", "Pet Friendly", "Fireplace"],
            110,
            &[(
                "Tom Baker",
                "/avatars/tom.jpg",
                "4",
                "Quiet and charming. Our dog loved the garden.",
                "May 2024",
            )],
            "Retired librarian who enjoys gardening and baking scones.",
            (2, 1, 4),
            None,
        ),
    ]
}

/// Builds a sample [`Property`] out of the raw data.
#[expect(clippy::too_many_arguments, reason = "plain sample data")]
fn property(
    name: &str,
    rating: &str,
    (city, country): (&str, &str),
    description: &str,
    image: &str,
    images: &[&str],
    amenities: &[&str],
    price: u64,
    reviews: &[RawReview],
    host_bio: &str,
    (bed, shower, occupants): (u8, u8, u8),
    discount: Option<&str>,
) -> Property {
    let name = Name::new(name).expect("valid sample `Name`");
    Property {
        slug: Slug::from_name(&name),
        name,
        rating: rating.parse().expect("valid sample `Rating`"),
        address: Address {
            city: city.to_owned(),
            country: country.to_owned(),
        },
        description: description.to_owned(),
        image: ImageUrl::new(image),
        images: images.iter().copied().map(ImageUrl::new).collect(),
        amenities: amenities
            .iter()
            .map(|&a| Amenity::new(a).expect("valid sample `Amenity`"))
            .collect(),
        price: Money::whole(price),
        reviews: reviews.iter().copied().map(review).collect(),
        host_bio: host_bio.to_owned(),
        offers: Offers {
            bed,
            shower,
            occupants,
        },
        discount: discount
            .map(|d| d.parse::<Percent>().expect("valid sample discount")),
    }
}

/// Builds a sample [`Review`] out of the raw data.
fn review((author, avatar, rating, comment, date): RawReview) -> Review {
    Review {
        author: Name::new(author).expect("valid sample author `Name`"),
        avatar: ImageUrl::new(avatar),
        rating: rating.parse::<Rating>().expect("valid sample `Rating`"),
        comment: comment.to_owned(),
        date: Some(date.to_owned()),
    }
}
