use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use crate::config::CoreNlpConfig;
use crate::tree::Tree;

use super::{strip_root, ParserError, SentenceParser};

#[derive(Debug, Deserialize)]
struct AnnotationResponse {
    #[serde(default)]
    sentences: Vec<AnnotatedSentence>,
}

#[derive(Debug, Deserialize)]
struct AnnotatedSentence {
    #[serde(default)]
    parse: String,
}

/// Adapter for a CoreNLP annotation server.
///
/// The sentence is POSTed as the request body with the annotator pipeline
/// passed through the `properties` query parameter; the server answers with
/// a JSON document whose `sentences[i].parse` fields carry bracketed
/// constituency markup.
#[derive(Debug, Clone)]
pub struct CoreNlpParser {
    config: CoreNlpConfig,
    client: Client,
}

impl CoreNlpParser {
    pub fn new(config: CoreNlpConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    async fn annotate(&self, sentence: &str) -> Result<Tree, ParserError> {
        let properties = json!({
            "annotators": self.config.annotators,
            "outputFormat": "json",
        });
        let response = self
            .client
            .post(&self.config.base_url)
            .query(&[("properties", properties.to_string())])
            .timeout(self.config.request_timeout)
            .body(sentence.to_string())
            .send()
            .await
            .map_err(|e| ParserError::Request(e.to_string()))?;

        let annotation: AnnotationResponse = response
            .json()
            .await
            .map_err(|e| ParserError::MalformedResponse(e.to_string()))?;

        let parse = annotation
            .sentences
            .first()
            .map(|sentence| sentence.parse.as_str())
            .filter(|parse| !parse.is_empty())
            .ok_or_else(|| {
                ParserError::MalformedResponse("no parse in response".to_string())
            })?;

        let tree = Tree::parse_bracketed(parse)
            .map_err(|e| ParserError::MalformedResponse(e.to_string()))?;
        Ok(strip_root(tree))
    }
}

#[async_trait]
impl SentenceParser for CoreNlpParser {
    async fn parse(&self, sentence: &str) -> Tree {
        match self.annotate(sentence).await {
            Ok(tree) => {
                debug!(parser = self.name(), "parsed sentence");
                tree
            }
            Err(error) => {
                warn!(parser = self.name(), %error, "falling back to the empty tree");
                Tree::empty()
            }
        }
    }

    fn name(&self) -> &str {
        "corenlp-server"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_deserialization() {
        let body = r#"{
            "sentences": [
                {
                    "index": 0,
                    "parse": "(ROOT\n  (S\n    (NP (PRP I))\n    (VP (VBP agree))))"
                }
            ]
        }"#;
        let response: AnnotationResponse = serde_json::from_str(body).unwrap();
        let tree = Tree::parse_bracketed(&response.sentences[0].parse).unwrap();
        assert_eq!(strip_root(tree).label(), Some("S"));
    }

    #[test]
    fn test_response_without_sentences() {
        let response: AnnotationResponse = serde_json::from_str("{}").unwrap();
        assert!(response.sentences.is_empty());
    }
}
