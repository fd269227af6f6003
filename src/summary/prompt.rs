//! Prompt construction for the summary stage
//!
//! The instruction template asks for exactly three labeled answer
//! fields, in German, so the rendered report stays uniform across
//! libraries. The per-library prompt is just the harvested URLs joined
//! by single spaces.

/// Fixed instruction template sent as the agent preamble
pub const SUMMARY_INSTRUCTIONS: &str = "\
Im Folgenden bekommst du URLs von einer Bibliotheksseite.
Bitte durchsuche diese Webseiten, ob in dieser Bibliothek eine >Online< Anmeldung möglich ist,
also die Beantragung eines Bibliotheksausweises über das Internet,
oder nur vor Ort in der Bibliothek.

Zusätzlich scanne die URLs nach Informationen zu Kosten des Bibliotheksausweises
und weiteren Ansprüchen an potenzielle Kunden (wie bspw. Wohnort etc.).

Alle URLs sind von ein und derselben Bibliothek,
also scanne erst alle URLs und triff anschließend eine Gesamtbewertung.

Bitte verzichte in deiner Antwort auf Erklärungen.

Antworte nur im folgenden Format:

Anmeldung Online oder Offline:
    \"Online\" (wenn eine Online-Anmeldung möglich ist)
    \"Offline\" (wenn nur eine Anmeldung vor Ort möglich ist)
    \"keine Informationen\" (wenn du dazu keine Informationen gefunden hast)

Kosten des Bibliotheksausweises: (Nenne hier den Preis.)

Weitere Informationen: (Nenne weitere relevante Informationen)";

/// Join the matched URLs of one library into the per-call prompt
pub fn join_urls(urls: &[String]) -> String {
    urls.join(" ")
}
