use console::Style;
use ormpack_core::io::image_io::OutputFormat;
use ormpack_core::job::JobConfig;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_job_summary(config: &JobConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Ormpack Convert"));
    println!(
        "  {}",
        s.title
            .apply_to("\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}")
    );
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(config.input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(config.output.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Format"),
        s.value.apply_to(config.save.format)
    );
    if config.save.format == OutputFormat::Tga {
        println!(
            "  {:<14}{}",
            s.label.apply_to("TGA RLE"),
            if config.save.tga_rle {
                s.value.apply_to("on".to_string())
            } else {
                s.disabled.apply_to("off".to_string())
            }
        );
    }
    println!();

    println!("  {}", s.header.apply_to("Channels"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Smoothness"),
        s.value
            .apply_to(format!("_CS.{}", config.channels.smoothness))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("AO"),
        s.value.apply_to(format!("_NAM.{}", config.channels.ao))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Metallic"),
        s.value
            .apply_to(format!("_NAM.{}", config.channels.metallic))
    );
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Roughness"),
        if config.invert_smoothness {
            s.value.apply_to("inverted from smoothness".to_string())
        } else {
            s.disabled.apply_to("smoothness passthrough".to_string())
        }
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("ORM alpha"),
        if config.drop_orm_alpha {
            s.disabled.apply_to("dropped".to_string())
        } else {
            s.value.apply_to("opaque".to_string())
        }
    );
    println!();
}
