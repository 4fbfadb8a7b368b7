use crate::content::{Block, Figure, Fragment};

use super::{CustomMarkup, SectionMarkup, SiteMarkup};

fn heading(text: &str) -> Block {
    Block::Heading { text: text.to_string() }
}

fn para(text: &str) -> Block {
    Block::Paragraph { text: text.to_string() }
}

fn list(items: &[&str]) -> Block {
    Block::List {
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}

fn fragment(title: &str, blocks: Vec<Block>) -> Fragment {
    Fragment {
        title: title.to_string(),
        blocks,
    }
}

fn figure(name: &str, image: &str, details: &[&str]) -> Figure {
    Figure {
        name: name.to_string(),
        image: image.to_string(),
        details: details.iter().map(|s| s.to_string()).collect(),
    }
}

fn section(id: &str, title: &str, items: &[&str], generic: Fragment) -> SectionMarkup {
    SectionMarkup {
        id: id.to_string(),
        title: title.to_string(),
        items: items.iter().map(|s| s.to_string()).collect(),
        generic,
    }
}

fn custom(section: &str, label: &str, fragment: Fragment) -> CustomMarkup {
    CustomMarkup {
        section: section.to_string(),
        label: label.to_string(),
        fragment,
    }
}

fn product_figures() -> Vec<Figure> {
    vec![
        figure("Wedding Cakes", "img/img1.png", &["Custom-designed wedding cakes for your special day"]),
        figure("Cupcakes", "img/img2.png", &["Variety of flavors and decorative designs"]),
        figure("Birthday Cakes", "img/img3.png", &["Personalized cakes for all ages"]),
        figure("Pastries", "img/img4.png", &["Fresh-baked daily pastries and treats"]),
        figure("Cookies", "img/img5.png", &["Classic and custom-designed cookies"]),
        figure("Pies", "img/img6.png", &["Delicious homemade pies for any occasion"]),
    ]
}

pub(super) fn site() -> SiteMarkup {
    let sections = vec![
        section(
            "services",
            "Our Services",
            &["Our Mission"],
            fragment(
                "Our Services",
                vec![
                    heading("Welcome to Cake Walk Baking Co."),
                    para("Handcrafted cakes, pastries and treats for every celebration."),
                ],
            ),
        ),
        section(
            "products",
            "Our Products",
            &["Gallery", "Wedding Cakes", "Cupcakes", "Birthday Cakes", "Pastries", "Cookies", "Pies"],
            fragment(
                "Our Products",
                vec![
                    heading("Our Products"),
                    Block::Carousel { figures: product_figures() },
                ],
            ),
        ),
        section(
            "contact",
            "Contact Us",
            &["Location", "Phone", "Contact Form"],
            fragment(
                "Contact Us",
                vec![
                    heading("Contact Us"),
                    para("123 Bakery Lane, Sweetville"),
                    para("(555) 123-4567"),
                    para("info@cakewalkbakery.com"),
                ],
            ),
        ),
        section(
            "about",
            "About Us",
            &["Our Story", "Our Team", "Policies"],
            fragment(
                "About Us",
                vec![
                    heading("About Cake Walk Baking Co."),
                    para("A family bakery creating sweet moments, one bite at a time."),
                ],
            ),
        ),
    ];

    let custom = vec![
        custom(
            "services",
            "Our Mission",
            fragment(
                "Our Mission",
                vec![
                    heading("The Cake Walk Promise"),
                    para("At Cake Walk Baking Co., our mission is to create exceptional baked goods that bring joy and sweetness to every celebration. We believe in:"),
                    list(&[
                        "Quality Ingredients - premium, locally-sourced ingredients whenever possible.",
                        "Artisanal Approach - every item is handcrafted with attention to detail.",
                        "Custom Creations - we design the perfect treat for your occasion.",
                        "Community Focus - we support local suppliers and community events.",
                    ]),
                    para("\"Creating sweet moments, one bite at a time.\""),
                ],
            ),
        ),
        custom(
            "products",
            "Gallery",
            fragment(
                "Product Gallery",
                vec![
                    heading("Click on a product for more details"),
                    Block::Carousel { figures: product_figures() },
                ],
            ),
        ),
        custom(
            "products",
            "Wedding Cakes",
            fragment(
                "Wedding Cakes",
                vec![
                    heading("Celebrate Your Special Day"),
                    para("Our wedding cakes are custom designed to match your vision and theme, a stunning centerpiece for your reception."),
                    heading("Features:"),
                    list(&[
                        "Custom design consultations",
                        "Premium ingredients",
                        "Multiple flavor options",
                        "Decorative elements like sugar flowers",
                        "Delivery and setup available",
                    ]),
                    heading("How to Order"),
                    para("Wedding cakes require consultation and advance booking. Please contact us at least 3 months before your wedding date."),
                    para("Starting at $350"),
                ],
            ),
        ),
        custom(
            "products",
            "Cupcakes",
            fragment(
                "Cupcakes",
                vec![
                    heading("Little Bites of Joy"),
                    para("Freshly baked cupcakes in classic and seasonal flavors, decorated by hand."),
                    list(&["Vanilla Bean", "Double Chocolate", "Red Velvet", "Lemon Raspberry"]),
                    para("Starting at $3 each, $30 per dozen"),
                ],
            ),
        ),
        custom(
            "contact",
            "Location",
            fragment(
                "Visit Our Bakery",
                vec![
                    para("123 Bakery Lane, Sweetville"),
                    heading("Hours"),
                    list(&[
                        "Monday - Friday: 7am - 7pm",
                        "Saturday: 8am - 6pm",
                        "Sunday: 9am - 3pm",
                    ]),
                ],
            ),
        ),
        custom(
            "contact",
            "Contact Form",
            fragment(
                "Send Us a Message",
                vec![
                    para("Have a question or ready to place an order? Fill out the form below and we'll get back to you as soon as possible."),
                    Block::ContactForm,
                    heading("Response Time"),
                    para("We typically respond to inquiries within 24 hours during business days."),
                ],
            ),
        ),
        custom(
            "about",
            "Our Story",
            fragment(
                "Our Story",
                vec![
                    para("Cake Walk Baking Co. started in a home kitchen and grew into the neighborhood's favorite bakery."),
                    para("Every recipe still goes through the same family tasting table."),
                ],
            ),
        ),
    ];

    SiteMarkup { sections, custom }
}
