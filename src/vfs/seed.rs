//! The built-in portfolio tree

use super::{Node, ToyFs};

/// The default tree: a developer's home with the portfolio checkout
pub fn portfolio() -> ToyFs {
    let projects = Node::dir_with([
        ("ecommerce-platform", Node::dir()),
        ("task-manager", Node::dir()),
        ("weather-dashboard", Node::dir()),
        ("chat-application", Node::dir()),
    ]);

    let skills = Node::dir_with([
        ("frontend.json", Node::file("3.2KB", "2024-01-15")),
        ("backend.json", Node::file("2.8KB", "2024-01-15")),
        ("database.json", Node::file("1.9KB", "2024-01-15")),
        ("tools.json", Node::file("2.1KB", "2024-01-15")),
    ]);

    let portfolio = Node::dir_with([
        ("projects", projects),
        ("skills", skills),
        ("certifications", Node::dir()),
        ("resume.pdf", Node::file("2.1MB", "2024-01-15")),
        ("README.md", Node::file("4.2KB", "2024-01-20")),
        ("package.json", Node::file("1.8KB", "2024-01-18")),
        ("index.html", Node::file("12.5KB", "2024-01-20")),
    ]);

    ToyFs::new(Node::dir_with([(
        "home",
        Node::dir_with([("developer", Node::dir_with([("portfolio", portfolio)]))]),
    )]))
}
