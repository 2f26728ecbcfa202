//! The engine the presentation layer calls.
//!
//! `run(tool_id, fields)` resolves the tool, extracts its fields, runs the
//! converter and shapes the output. Document tools go through
//! `run_document`, which validates the upload and delegates to a
//! [`DocumentService`].

use std::sync::OnceLock;

use chrono::{Local, NaiveDate};
use ck_calculators::{age, body_mass_index, grade_point_average, percentage, pregnancy};
use ck_core::utilities::data_formatters::{format_grouped_trimmed, format_percent, format_trimmed};
use ck_core::{ensure, fail, ConversionResult, EngineConfig, Error, Result, ResultShape, Settings};
use ck_currencies::RateTable;
use ck_numerals::{binary_to_text, convert_base, parse_whole_number, text_to_binary, to_number, to_roman, to_words};
use ck_text::{analyze, decode_base64, digest, encode_base64, generate_password, HashAlgorithm, PasswordOptions};
use ck_units::temperature::{convert_between, display_temperature};
use ck_units::{ConversionRequest, LinearConverter, QuantityKind, TemperatureScale, UnitRegistry};
use rand::Rng;
use tracing::{debug, debug_span, error, warn};

use crate::binding::{Converter, ConverterBinding};
use crate::document::{
    output_mime, suggested_filename, validate_inputs, DocumentOptions, DocumentRequest,
    DocumentService, DocumentTool, InputFile, IMAGE_FORMATS, PDF_TO_JPG_MAX_PAGES,
};
use crate::fields::{FieldKind, FieldSpec, Fields, RawFields};
use crate::formatter::{format, RawOutput};
use crate::registry::ToolRegistry;

const DOCUMENT_FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("range", FieldKind::Text),
    FieldSpec::with_default("format", FieldKind::Choice, "image/png"),
    FieldSpec::with_default("quality", FieldKind::Number, "80"),
];

/// Runs tools against one configuration.
#[derive(Debug, Clone)]
pub struct ConversionEngine {
    config: EngineConfig,
    registry: ToolRegistry,
    units: &'static UnitRegistry,
    fiat: RateTable,
    crypto: RateTable,
}

static SHARED: OnceLock<Result<ConversionEngine>> = OnceLock::new();

impl ConversionEngine {
    /// Build an engine with the standard tool catalogue.
    pub fn new(config: EngineConfig) -> Result<Self> {
        Self::with_registry(config, ToolRegistry::standard())
    }

    /// Build an engine over a custom catalogue.
    pub fn with_registry(config: EngineConfig, registry: ToolRegistry) -> Result<Self> {
        config.validate()?;
        let fiat = RateTable::fiat().with_overrides(&config.fiat_rates)?;
        let crypto = RateTable::crypto().with_overrides(&config.crypto_rates)?;
        Ok(Self {
            config,
            registry,
            units: UnitRegistry::standard(),
            fiat,
            crypto,
        })
    }

    /// The process-wide engine, built on first use from
    /// [`Settings::instance`].
    pub fn shared() -> Result<&'static ConversionEngine> {
        SHARED
            .get_or_init(|| Self::new(Settings::instance().config().clone()))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The tool catalogue.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// The fiat rate table in use.
    pub fn fiat_rates(&self) -> &RateTable {
        &self.fiat
    }

    /// The crypto rate table in use.
    pub fn crypto_rates(&self) -> &RateTable {
        &self.crypto
    }

    /// Run `tool_id` on `raw`. Random tools draw from the thread RNG and
    /// date tools default to today's local date.
    pub fn run(&self, tool_id: &str, raw: &RawFields) -> Result<ConversionResult> {
        self.run_with_rng(tool_id, raw, &mut rand::thread_rng())
    }

    /// Run `tool_id` on `raw`, drawing randomness from `rng`.
    pub fn run_with_rng<R: Rng + ?Sized>(
        &self,
        tool_id: &str,
        raw: &RawFields,
        rng: &mut R,
    ) -> Result<ConversionResult> {
        let _span = debug_span!("tool", tool_id).entered();
        let binding = self.registry.resolve(tool_id)?;
        debug!(converter = ?binding.converter, "dispatching");
        let fields = Fields::new(raw, &binding.fields);
        let output = self.execute(binding, &fields, rng)?;
        Ok(format(binding.shape, output))
    }

    fn execute<R: Rng + ?Sized>(
        &self,
        binding: &ConverterBinding,
        fields: &Fields<'_>,
        rng: &mut R,
    ) -> Result<RawOutput> {
        let precision = &self.config.precision;
        let output = match binding.converter {
            Converter::Linear(kind) => self.linear(kind, fields)?,
            Converter::Temperature => {
                let value = fields.real("value")?;
                let from: TemperatureScale = fields.text("from")?.parse()?;
                let to: TemperatureScale = fields.text("to")?.parse()?;
                let result = convert_between(value, from, to)?;
                let decimals = precision.temperature;
                RawOutput::titled(
                    format!("{} {} =", format_trimmed(value, usize::from(decimals)), from.symbol()),
                    display_temperature(result, to, decimals),
                    format!("{} → {}", from.label(), to.label()),
                )
            }
            Converter::Fiat | Converter::Crypto => {
                let table = if binding.converter == Converter::Fiat {
                    &self.fiat
                } else {
                    &self.crypto
                };
                let amount = fields.real("amount")?;
                let conversion = table.convert(amount, &fields.text("from")?, &fields.text("to")?)?;
                RawOutput::titled(
                    conversion.title(),
                    conversion.main_value(),
                    conversion.sub_value(precision.exchange_rate),
                )
            }
            Converter::Radix => RawOutput::Text(convert_base(
                &fields.text("value")?,
                fields.base("fromBase")?,
                fields.base("toBase")?,
            )?),
            Converter::Roman => {
                let value = fields.text("value")?;
                match fields.text("mode")?.as_str() {
                    "toRoman" => RawOutput::Text(to_roman(parse_whole_number("value", &value)?)?),
                    "toNumber" => RawOutput::Text(to_number(&value)?.to_string()),
                    other => fail!("Unknown Roman numeral mode: {other}"),
                }
            }
            Converter::Words => {
                RawOutput::Text(to_words(parse_whole_number("value", &fields.text("value")?)?)?)
            }
            Converter::TextToBinary => RawOutput::Text(text_to_binary(&fields.text("text")?)?),
            Converter::BinaryToText => RawOutput::Text(binary_to_text(&fields.text("text")?)?),
            Converter::WordStats => {
                let text = fields.optional_text("text").unwrap_or_default();
                RawOutput::Stats(analyze(&text, self.config.words_per_minute).fields())
            }
            Converter::Password => {
                let options = PasswordOptions {
                    length: fields.count("length")?,
                    uppercase: fields.flag("uppercase")?,
                    numbers: fields.flag("numbers")?,
                    symbols: fields.flag("symbols")?,
                };
                RawOutput::Text(generate_password(&options, &self.config.password, rng)?)
            }
            Converter::Base64Encode => RawOutput::Text(encode_base64(&fields.text("text")?)?),
            Converter::Base64Decode => RawOutput::Text(decode_base64(&fields.text("text")?)?),
            Converter::Hash => {
                let algorithm: HashAlgorithm = fields.text("algorithm")?.parse()?;
                RawOutput::Text(digest(&fields.text("text")?, algorithm))
            }
            Converter::Bmi => {
                let bmi = body_mass_index(fields.real("weight")?, fields.real("height")?)?;
                RawOutput::Stats(bmi.fields())
            }
            Converter::Gpa => {
                let gpa = grade_point_average(
                    &fields.real_list("grades")?,
                    &fields.real_list("credits")?,
                )?;
                let name = binding.title.trim_end_matches(" Calculator");
                RawOutput::titled(format!("Your {name}"), gpa.display_value(), gpa.credits_note())
            }
            Converter::Percentage => {
                let value = fields.real("value")?;
                let total = fields.real("total")?;
                let percent = percentage(value, total)?;
                let (v, t) = (format_grouped_trimmed(value, 6), format_grouped_trimmed(total, 6));
                RawOutput::titled(
                    format!("{v} of {t} ="),
                    format_percent(percent, 2),
                    format!("{v} ÷ {t} × 100"),
                )
            }
            Converter::Age => {
                let birth = fields.date("date")?;
                let as_of = fields.optional_date("asOf")?.unwrap_or_else(today);
                RawOutput::Stats(age(birth, as_of)?.fields())
            }
            Converter::Pregnancy => {
                let lmp = fields.date("date")?;
                let as_of = fields.optional_date("asOf")?.unwrap_or_else(today);
                let p = pregnancy(lmp, as_of)?;
                RawOutput::titled("Estimated Due Date", p.display_due_date(), p.progress_note())
            }
        };
        Ok(output)
    }

    fn linear(&self, kind: QuantityKind, fields: &Fields<'_>) -> Result<RawOutput> {
        let request = ConversionRequest::new(fields.real("value")?, fields.text("from")?, fields.text("to")?);
        let conversion = LinearConverter::new(self.units).convert(kind, &request)?;
        let decimals = kind.display_precision(&self.config.precision);
        Ok(RawOutput::titled(
            format!("{} {} =", conversion.display_value(decimals), conversion.from.label),
            format!("{} {}", conversion.display_result(decimals), conversion.to.label),
            format!("{} → {}", conversion.from.symbol, conversion.to.symbol),
        ))
    }

    /// Run a document tool through `service`.
    ///
    /// Inputs are validated first; collaborator failures are logged and
    /// reported as [`Error::DocumentProcessing`]. Each produced file becomes
    /// one `FileArtifact` result.
    pub fn run_document(
        &self,
        tool_id: &str,
        files: Vec<InputFile>,
        raw: &RawFields,
        service: &dyn DocumentService,
    ) -> Result<Vec<ConversionResult>> {
        let _span = debug_span!("document", tool_id).entered();
        let tool: DocumentTool = tool_id.parse().map_err(|e| {
            warn!(tool_id, "unknown document tool requested");
            e
        })?;
        validate_inputs(tool, &files)?;
        let options = document_options(tool, &Fields::new(raw, DOCUMENT_FIELDS))?;
        let request = DocumentRequest {
            tool,
            files,
            options,
        };
        debug!(files = request.files.len(), "calling document service");

        let artifacts = service.process(&request).map_err(|e| {
            error!(tool = %tool, error = %e, "document processing failed");
            Error::DocumentProcessing(e.to_string())
        })?;
        if artifacts.is_empty() {
            error!(tool = %tool, "document service produced no output");
            return Err(Error::DocumentProcessing("No output was produced".to_string()));
        }

        let limit = match tool {
            DocumentTool::PdfToJpg => PDF_TO_JPG_MAX_PAGES as usize,
            _ => artifacts.len(),
        };
        // Inputs were validated non-empty above.
        let first = &request.files[0];
        Ok(artifacts
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(i, artifact)| {
                let filename = if artifact.suggested_filename.is_empty() {
                    suggested_filename(tool, &first.name, &request.options, i + 1)
                } else {
                    artifact.suggested_filename
                };
                let mime_type = if artifact.mime_type.is_empty() {
                    output_mime(tool, first, &request.options)
                } else {
                    artifact.mime_type
                };
                format(
                    ResultShape::FileArtifact,
                    RawOutput::File {
                        bytes: artifact.bytes,
                        filename,
                        mime_type,
                    },
                )
            })
            .collect())
    }
}

fn document_options(tool: DocumentTool, fields: &Fields<'_>) -> Result<DocumentOptions> {
    let options = match tool {
        DocumentTool::SplitPdf => match fields.optional_text("range") {
            Some(range) => DocumentOptions::PageRange(range),
            None => fail!("Please enter a page range (e.g., 1-3)."),
        },
        DocumentTool::ImageConverter => {
            let format = fields.text("format")?;
            ensure!(
                IMAGE_FORMATS.contains(&format.as_str()),
                "Unsupported image format: {format}"
            );
            DocumentOptions::Format(format)
        }
        DocumentTool::ImageCompressor => {
            let quality = fields.count("quality")?;
            ensure!(
                (1..=100).contains(&quality),
                "Quality must be between 1 and 100"
            );
            // Bounded above.
            DocumentOptions::Quality(quality as u8)
        }
        _ => DocumentOptions::None,
    };
    Ok(options)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
