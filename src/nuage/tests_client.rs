//! Campagne de tests du client nuage (serveur HTTP simulé).
//!
//! Propriétés couvertes :
//! - scénario nominal : soumission, deux sondages "pending", puis le résultat
//! - une soumission refusée court-circuite sans aucun sondage
//! - 404 au sondage n'est jamais fatal : réessayé jusqu'au bout du budget,
//!   puis DelaiDepasse après exactement `max_tentatives` sondages
//! - les corps non conformes sont traités comme "en attente"
//! - une panne transport remonte en Reseau
//!
//! Les délais de test sont courts (1 ms) : la boucle est la même,
//! seul le budget temps change.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use mockito::Matcher;

use super::client::ClientNuage;
use super::config::ConfigNuage;
use super::erreur::ErreurNuage;
use super::protocole::{ReponseSoumission, Sondage, TacheNuage};
use crate::noyau::Operateur;

fn config_test(base_url: &str, max_tentatives: u32) -> ConfigNuage {
    ConfigNuage {
        base_url: base_url.to_string(),
        max_tentatives,
        delai: Duration::from_millis(1),
        ..ConfigNuage::default()
    }
}

fn tache(id: &str) -> TacheNuage {
    TacheNuage::from(ReponseSoumission {
        task_id: id.to_string(),
    })
}

#[tokio::test(flavor = "multi_thread")]
async fn nominal_deux_attentes_puis_resultat() {
    let mut serveur = mockito::Server::new_async().await;

    let soumission = serveur
        .mock("POST", "/calculate")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "a": 3.0, "b": 4.0, "op": "+"
        })))
        .with_status(202)
        .with_header("content-type", "application/json")
        .with_body(r#"{"task_id": "t1"}"#)
        .create_async()
        .await;

    // Deux réponses "pending", puis le résultat.
    let sondage = serveur
        .mock("GET", "/result/t1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body_from_request({
            let appels = AtomicUsize::new(0);
            move |_| {
                if appels.fetch_add(1, Ordering::SeqCst) < 2 {
                    br#"{"status": "pending"}"#.to_vec()
                } else {
                    br#"{"status": "completed", "result": 7.0}"#.to_vec()
                }
            }
        })
        .expect(3)
        .create_async()
        .await;

    let client = ClientNuage::new(&config_test(&serveur.url(), 50));
    let valeur = client
        .calculer(3.0, 4.0, Operateur::Addition)
        .await
        .expect("résultat attendu");
    assert_eq!(valeur, 7.0);

    soumission.assert_async().await;
    sondage.assert_async().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn soumission_refusee_court_circuite() {
    let mut serveur = mockito::Server::new_async().await;

    let soumission = serveur
        .mock("POST", "/calculate")
        .with_status(500)
        .create_async()
        .await;

    // Aucun sondage ne doit partir après un refus.
    let sondage = serveur
        .mock("GET", Matcher::Regex("^/result/".to_string()))
        .expect(0)
        .create_async()
        .await;

    let client = ClientNuage::new(&config_test(&serveur.url(), 50));
    let erreur = client
        .calculer(1.0, 2.0, Operateur::Multiplication)
        .await
        .expect_err("la soumission devait échouer");

    assert!(matches!(erreur, ErreurNuage::Soumission { statut: 500 }));
    soumission.assert_async().await;
    sondage.assert_async().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn budget_epuise_apres_404() {
    let mut serveur = mockito::Server::new_async().await;

    let soumission = serveur
        .mock("POST", "/calculate")
        .with_status(202)
        .with_body(r#"{"task_id": "t2"}"#)
        .create_async()
        .await;

    // 404 permanent : jamais fatal, réessayé à chaque tentative.
    let sondage = serveur
        .mock("GET", "/result/t2")
        .with_status(404)
        .expect(5)
        .create_async()
        .await;

    let client = ClientNuage::new(&config_test(&serveur.url(), 5));
    let erreur = client
        .calculer(6.0, 3.0, Operateur::Division)
        .await
        .expect_err("budget épuisé attendu");

    assert!(matches!(erreur, ErreurNuage::DelaiDepasse { tentatives: 5 }));
    // exactement 5 sondages, pas un de plus
    soumission.assert_async().await;
    sondage.assert_async().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn sonder_interprete_les_reponses() {
    let mut serveur = mockito::Server::new_async().await;

    let _pret = serveur
        .mock("GET", "/result/pret")
        .with_status(200)
        .with_body(r#"{"status": "completed", "result": -2.5}"#)
        .create_async()
        .await;
    let _absent = serveur
        .mock("GET", "/result/absent")
        .with_status(404)
        .create_async()
        .await;
    let _panne = serveur
        .mock("GET", "/result/panne")
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;
    let _illisible = serveur
        .mock("GET", "/result/illisible")
        .with_status(200)
        .with_body("pas du json")
        .create_async()
        .await;
    let _sans_valeur = serveur
        .mock("GET", "/result/sans-valeur")
        .with_status(200)
        .with_body(r#"{"status": "completed"}"#)
        .create_async()
        .await;

    let client = ClientNuage::new(&config_test(&serveur.url(), 1));

    assert_eq!(
        client.sonder(&tache("pret")).await.unwrap(),
        Sondage::Pret(-2.5)
    );
    assert_eq!(
        client.sonder(&tache("absent")).await.unwrap(),
        Sondage::EnAttente
    );
    assert_eq!(
        client.sonder(&tache("panne")).await.unwrap(),
        Sondage::EnAttente
    );
    assert_eq!(
        client.sonder(&tache("illisible")).await.unwrap(),
        Sondage::EnAttente
    );
    assert_eq!(
        client.sonder(&tache("sans-valeur")).await.unwrap(),
        Sondage::EnAttente
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn soumission_au_corps_illisible() {
    let mut serveur = mockito::Server::new_async().await;

    let _soumission = serveur
        .mock("POST", "/calculate")
        .with_status(200)
        .with_body("pas du json")
        .create_async()
        .await;

    let client = ClientNuage::new(&config_test(&serveur.url(), 5));
    let erreur = client
        .calculer(1.0, 1.0, Operateur::Addition)
        .await
        .expect_err("corps illisible");

    assert!(matches!(erreur, ErreurNuage::Decodage(_)));
}

#[tokio::test(flavor = "multi_thread")]
async fn panne_reseau() {
    // On note l'adresse puis on éteint le serveur : connexion refusée.
    let url = {
        let serveur = mockito::Server::new_async().await;
        serveur.url()
    };

    let client = ClientNuage::new(&config_test(&url, 5));
    let erreur = client
        .calculer(1.0, 2.0, Operateur::Soustraction)
        .await
        .expect_err("panne attendue");

    assert!(matches!(erreur, ErreurNuage::Reseau(_)));
}
