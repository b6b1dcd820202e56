//! Basic usage: set a language and translate message keys

use locale_translator::{Translator, TranslatorConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = TranslatorConfig::default().with_path("i18n");
    let translator = Translator::new(config)?;

    translator.set_language("ja").await;
    println!("{}", translator.translate("hello").await?);
    println!("{}", translator.translate("{#hello}{#world}!").await?);

    Ok(())
}
