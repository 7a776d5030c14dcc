//! Framework blocks (Astro, Next.js, Nuxt)
//!
//! Frameworks ride on the Node.js runtime and are listed under the runtime
//! category alongside it.

use crate::core::{Category, ConfigOption, SelectChoice, ServiceBlock};

pub fn framework_blocks() -> Vec<ServiceBlock> {
    vec![
        ServiceBlock::new(
            "astro",
            "Astro",
            "🚀",
            Category::Runtime,
            "The web framework for content-driven websites",
        )
        .versions(["4.x", "3.x"], "4.x")
        .requires(["nodejs"])
        .suggested_with(["nodejs"])
        .option(ConfigOption::number("port", "Dev Server Port", 4321))
        .option(
            ConfigOption::select(
                "output",
                "Output Mode",
                "static",
                vec![
                    SelectChoice::new("static", "Static (Pre-rendered)"),
                    SelectChoice::new("server", "Server (SSR)"),
                    SelectChoice::new("hybrid", "Hybrid (Mixed)"),
                ],
            )
            .describe("How your site is rendered"),
        )
        .option(
            ConfigOption::multiline("integrations", "Integrations", "tailwind, sitemap")
                .describe("Comma-separated list of Astro integrations"),
        ),
        ServiceBlock::new(
            "nextjs",
            "Next.js",
            "▲",
            Category::Runtime,
            "The React framework for the web",
        )
        .versions(["15", "14", "13"], "15")
        .requires(["nodejs"])
        .suggested_with(["nodejs", "postgresql", "redis"])
        .option(ConfigOption::number("port", "Dev Server Port", 3000))
        .option(
            ConfigOption::checkbox("app_router", "Use App Router", true)
                .describe("Use the new App Router (recommended)"),
        )
        .option(ConfigOption::checkbox("typescript", "TypeScript", true))
        .option(ConfigOption::checkbox("tailwind", "Tailwind CSS", true))
        .option(ConfigOption::checkbox("src_dir", "Use src/ directory", true)),
        ServiceBlock::new("nuxt", "Nuxt", "💚", Category::Runtime, "The intuitive Vue framework")
            .versions(["3.x"], "3.x")
            .requires(["nodejs"])
            .suggested_with(["nodejs", "postgresql", "redis"])
            .option(ConfigOption::number("port", "Dev Server Port", 3000))
            .option(ConfigOption::checkbox("ssr", "Server-Side Rendering", true))
            .option(ConfigOption::checkbox("typescript", "TypeScript", true))
            .option(
                ConfigOption::multiline("modules", "Nuxt Modules", "@nuxtjs/tailwindcss, @pinia/nuxt")
                    .describe("Comma-separated list of Nuxt modules"),
            ),
    ]
}
