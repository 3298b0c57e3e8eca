use super::engine::TeraEngine;
use crate::activity::ContactAttributes;
use crate::config::Locale;
use crate::error::PromptError;
use std::fmt;
use tera::Context;

const EMAIL_DRAFT_EN: &str = "\
You are an email marketing expert. Your task is to write a highly personalised email draft.

Customer information:
- First name: {{ first_name }}
- Last name: {{ last_name }}
- Email: {{ email }}
- Last product purchased: {{ last_purchase }}

Instructions:
1. Write a complete email, including an engaging subject line and a message body.
2. The tone must be friendly, warm and helpful, never aggressive.
3. Mention their last purchase to show that we know them.
4. Suggest one complementary product or a category they might like.
5. Finish with one clear call to action, such as visiting a web page or using a discount code.
6. Do NOT include placeholders such as \"[Company name]\". Be creative.
7. Respond only with the email as a JSON object with the keys \"subject\" and \"body\". \
Example: {\"subject\": \"Your next discovery is waiting\", \"body\": \"Hi...\"}
";

const EMAIL_DRAFT_ES: &str = "\
Eres un experto en marketing por email. Tu tarea es escribir un borrador de correo electrónico altamente personalizado.

Información del cliente:
- Nombre: {{ first_name }}
- Apellido: {{ last_name }}
- Email: {{ email }}
- Último producto comprado: {{ last_purchase }}

Instrucciones:
1. Escribe un correo completo, con un asunto atractivo y el cuerpo del mensaje.
2. El tono debe ser amigable, cercano y servicial, nunca agresivo.
3. Menciona su última compra para mostrar que lo conocemos.
4. Sugiere un producto complementario o una categoría que le pueda interesar.
5. Termina con un llamado a la acción claro, como visitar una página web o usar un código de descuento.
6. NO incluyas placeholders como \"[Nombre de la empresa]\". Sé creativo.
7. Responde únicamente con el correo en formato JSON, con las claves \"asunto\" y \"cuerpo\". \
Ejemplo: {\"asunto\": \"Tu próximo descubrimiento te espera\", \"cuerpo\": \"Hola...\"}
";

const EMAIL_DRAFT_EN_NAME: &str = "email_draft.en";
const EMAIL_DRAFT_ES_NAME: &str = "email_draft.es";

/// Substitutes for attributes the journey did not supply.
struct Fallbacks {
    first_name: &'static str,
    last_purchase: &'static str,
}

fn template_for(locale: Locale) -> (&'static str, Fallbacks) {
    match locale {
        Locale::En => (
            EMAIL_DRAFT_EN_NAME,
            Fallbacks {
                first_name: "valued customer",
                last_purchase: "one of our excellent products",
            },
        ),
        Locale::Es => (
            EMAIL_DRAFT_ES_NAME,
            Fallbacks {
                first_name: "valioso cliente",
                last_purchase: "uno de nuestros excelentes productos",
            },
        ),
    }
}

/// Rendered instruction document for one contact. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    text: String,
}

impl GenerationRequest {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for GenerationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Renders the email-draft instructions for a contact.
pub struct PromptBuilder {
    engine: TeraEngine,
    locale: Locale,
}

impl PromptBuilder {
    /// Registers every locale's template up front so rendering only ever
    /// sees parsed templates with a complete context.
    pub fn new(locale: Locale) -> Result<Self, PromptError> {
        let mut engine = TeraEngine::new();
        engine.add_template(EMAIL_DRAFT_EN_NAME, EMAIL_DRAFT_EN)?;
        engine.add_template(EMAIL_DRAFT_ES_NAME, EMAIL_DRAFT_ES)?;
        Ok(Self { engine, locale })
    }

    pub fn build(&self, attributes: &ContactAttributes) -> Result<GenerationRequest, PromptError> {
        let (template, fallbacks) = template_for(self.locale);

        let mut ctx = Context::new();
        ctx.insert(
            "first_name",
            attributes.get_or("FirstName", fallbacks.first_name),
        );
        ctx.insert("last_name", attributes.get_or("LastName", ""));
        ctx.insert("email", attributes.get_or("EmailAddress", ""));
        ctx.insert(
            "last_purchase",
            attributes.get_or("LastPurchase", fallbacks.last_purchase),
        );

        let text = self.engine.render(template, &ctx)?;
        Ok(GenerationRequest { text })
    }
}
