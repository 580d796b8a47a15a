use crate::error::PromptError;
use std::path::Path;
use tera::{Context, Tera};

const RUBRIC_TEMPLATE_NAME: &str = "rubric";

/// Built-in grading rubric. `{{ context }}` receives the student's own
/// description of the design.
pub const DEFAULT_RUBRIC: &str = r#"Actúa como un profesor estricto pero constructivo de Artes Plásticas y Visuales de 4º año de secundaria en Bolivia.
Tu tarea es evaluar el diseño de un logotipo enviado por un estudiante.

---------------------------------------------------------
🚨 VERIFICACIÓN DE REQUISITO EXCLUYENTE (CRÍTICO) 🚨
1. El diseño debe ser EXCLUSIVAMENTE un ANIMAL de la fauna boliviana.
2. SI LA IMAGEN CONTIENE UNA PERSONA, ROSTRO HUMANO O SILUETA HUMANA:
   - Debes declarar el trabajo como "FUERA DE PEDIDO".
   - Indica claramente: "La consigna es diseñar un animal, no una figura humana."
   - Asigna una nota de 10/100.
   - Detén el análisis técnico detallado.
---------------------------------------------------------

Contexto del estudiante: "{{ context }}"

Si la imagen es un ANIMAL, evalúa detalladamente considerando los siguientes criterios (20 puntos cada uno):

1. **Síntesis de Formas:**
   - ¿La imagen ha sido simplificada a formas geométricas básicas (triángulos, círculos, cuadrados) o sigue siendo un dibujo realista?
   - Busca la aplicación de la estilización, evitando detalles innecesarios (pelaje realista, ojos complejos).

2. **Claridad del Mensaje Visual (Iconología y Cosmovisión):**
   - ¿Se identifica claramente qué animal es?
   - ¿Transmite el significado del animal en la cosmovisión andina/amazónica? (Ej: Puma=Fuerza/Kay Pacha, Cóndor=Espiritualidad/Hanan Pacha).

3. **Principios de Composición:**
   - **Equilibrio:** ¿Es simétrico o asimétrico? ¿Está balanceado visualmente?
   - **Contraste:** Uso de positivo/negativo.
   - **Proporción:** Relación armónica entre las partes.

4. **Originalidad:**
   - ¿Es una propuesta creativa propia o parece una copia genérica? Uso de rasgos culturales bolivianos (cruz andina, signos escalonados) integrados en el animal.

5. **Acabado Técnico:**
   - Limpieza del trazo, definición de líneas y presentación general.

---------------------------------------------------------
FORMATO DE RESPUESTA (Markdown):

# Evaluación de Logotipo - [Nombre del Animal]

**Estado:** [CUMPLE / FUERA DE PEDIDO]

**Análisis de Criterios:**
*   **Síntesis de Formas:** [Evaluación crítica]
*   **Claridad del Mensaje Visual:** [Evaluación del significado]
*   **Principios de Composición:** [Evaluación de equilibrio, contraste, proporción]
*   **Originalidad y Acabado:** [Evaluación final]

**Fortalezas:**
*   [Lista de puntos fuertes]

**Correcciones y Mejoras:**
*   [Instrucción 1: Ej. "Simplificar las garras usando triángulos..."]
*   [Instrucción 2]

CALIFICACIÓN FINAL: [0-100]/100
"#;

/// Tera-backed rubric prompt.
pub struct RubricPrompt {
    tera: Tera,
}

impl RubricPrompt {
    /// The built-in rubric.
    pub fn builtin() -> Result<Self, PromptError> {
        Self::from_template(DEFAULT_RUBRIC)
    }

    /// A rubric from a string; it must be a valid Tera template.
    pub fn from_template(template: &str) -> Result<Self, PromptError> {
        let mut tera = Tera::default();
        tera.add_raw_template(RUBRIC_TEMPLATE_NAME, template)
            .map_err(|e| PromptError::Render(e.to_string()))?;
        Ok(Self { tera })
    }

    /// A rubric loaded from a template file.
    pub fn from_file(path: &Path) -> Result<Self, PromptError> {
        let template = std::fs::read_to_string(path)
            .map_err(|e| PromptError::NotFound(format!("{}: {e}", path.display())))?;
        Self::from_template(&template)
    }

    /// Use `path` when configured, otherwise the built-in rubric.
    pub fn load(path: Option<&Path>) -> Result<Self, PromptError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::builtin(),
        }
    }

    /// Render the prompt with the student's context (trimmed; may be empty).
    pub fn render(&self, student_context: &str) -> Result<String, PromptError> {
        let mut ctx = Context::new();
        ctx.insert("context", student_context.trim());
        self.tera
            .render(RUBRIC_TEMPLATE_NAME, &ctx)
            .map_err(|e| PromptError::Render(e.to_string()))
    }
}
