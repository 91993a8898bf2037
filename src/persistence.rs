//! # Persistência — A Base Relacional do Cadastro
//!
//! Módulo responsável por guardar [`Professional`]s e [`Knowledge`]s em
//! SQLite via `sqlx`, em duas tabelas relacionadas:
//!
//! ```text
//! profissional(id PK, nome UNIQUE, celular, email, data_insercao)
//! conhecimento(id PK, nome, data_insercao,
//!              id_profissional FK → profissional.id ON DELETE CASCADE)
//! ```
//!
//! ## Sessões
//!
//! Cada operação pega sua própria conexão do pool. Escritas abrem uma
//! transação que só é efetivada no `commit()`; qualquer retorno antecipado
//! (erro ou `?`) descarta a transação, que sofre rollback no `Drop`.
//!
//! ## Unicidade
//!
//! A unicidade do nome do profissional é garantida pela constraint `UNIQUE`
//! da própria base. Inserts concorrentes com o mesmo nome disputam essa
//! constraint e o perdedor recebe [`StoreError::Conflict`].

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;

use crate::core::{
    Knowledge, NewKnowledge, NewProfessional, Professional, ProfessionalDetail, ProfessionalId,
};

/// Esquema criado de forma idempotente a cada conexão.
/// Quanto uma conexão espera pelo lock de escrita antes de desistir.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS profissional (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    nome          VARCHAR(140) NOT NULL UNIQUE,
    celular       TEXT NOT NULL,
    email         TEXT NOT NULL,
    data_insercao TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS conhecimento (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    nome            VARCHAR(4000) NOT NULL,
    data_insercao   TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
    id_profissional INTEGER NOT NULL REFERENCES profissional(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_conhecimento_profissional ON conhecimento(id_profissional);
CREATE INDEX IF NOT EXISTS idx_conhecimento_nome ON conhecimento(nome);
"#;

/// Erros da camada de persistência.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Violação da unicidade do nome do profissional.
    #[error("nome de profissional duplicado")]
    Conflict,
    #[error("sqlite: {0}")]
    Sql(#[from] sqlx::Error),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Converte erros de constraint `UNIQUE` em [`StoreError::Conflict`].
    fn from_write(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::Conflict,
            _ => StoreError::Sql(err),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Handle da base de dados, barato de clonar (o pool é um `Arc` interno).
#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Conecta na base indicada por `url` e cria as tabelas se necessário.
    ///
    /// Para URLs de arquivo, o diretório pai é criado antes da conexão.
    /// Chaves estrangeiras são sempre habilitadas (o SQLite as desliga por
    /// padrão), o que ativa o `ON DELETE CASCADE` de `conhecimento`.
    ///
    /// # Erros
    ///
    /// Retorna erro se a URL for inválida, se o diretório não puder ser
    /// criado ou se a conexão/criação do esquema falhar.
    pub async fn connect(url: &str) -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(BUSY_TIMEOUT);

        if let Some(parent) = options
            .get_filename()
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
        {
            std::fs::create_dir_all(parent)?;
        }

        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        let db = Self { pool };
        db.migrate().await?;
        tracing::info!(url = %url, "Base de dados pronta");
        Ok(db)
    }

    /// Base SQLite em memória, usada nos testes.
    ///
    /// Cada conexão SQLite em memória é uma base distinta, então o pool é
    /// limitado a uma única conexão que nunca expira.
    pub async fn in_memory() -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }

    /// Executa SQL arbitrário; usado pelos testes para simular falhas da base.
    #[cfg(test)]
    pub(crate) async fn execute_raw(&self, sql: &str) -> StoreResult<()> {
        sqlx::raw_sql(sql).execute(&self.pool).await?;
        Ok(())
    }

    async fn migrate(&self) -> StoreResult<()> {
        sqlx::raw_sql(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }

    // ─── Profissional ─────────────────────────────────────────────

    /// Insere um novo profissional e devolve sua visão completa
    /// (sem conhecimentos).
    ///
    /// # Erros
    ///
    /// [`StoreError::Conflict`] se já existir profissional com o mesmo nome.
    pub async fn insert_professional(&self, new: &NewProfessional) -> StoreResult<ProfessionalDetail> {
        let mut tx = self.pool.begin().await?;
        let created_at = new.created_at_or_now();

        let id = sqlx::query(
            "INSERT INTO profissional (nome, celular, email, data_insercao) VALUES (?, ?, ?, ?)",
        )
        .bind(&new.name)
        .bind(&new.phone)
        .bind(&new.email)
        .bind(created_at)
        .execute(&mut *tx)
        .await
        .map_err(StoreError::from_write)?
        .last_insert_rowid();

        tx.commit().await?;

        Ok(ProfessionalDetail {
            professional: Professional {
                id,
                name: new.name.clone(),
                phone: new.phone.clone(),
                email: new.email.clone(),
                created_at,
            },
            knowledge: Vec::new(),
        })
    }

    /// Todos os profissionais em ordem crescente de id.
    pub async fn list_professionals(&self) -> StoreResult<Vec<Professional>> {
        let rows = sqlx::query_as::<_, Professional>(
            "SELECT id, nome, celular, email, data_insercao FROM profissional ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Profissionais que têm um conhecimento com nome exatamente igual a
    /// `knowledge_name`. Cada profissional aparece no máximo uma vez.
    pub async fn professionals_with_knowledge(
        &self,
        knowledge_name: &str,
    ) -> StoreResult<Vec<Professional>> {
        let rows = sqlx::query_as::<_, Professional>(
            r#"
            SELECT DISTINCT p.id, p.nome, p.celular, p.email, p.data_insercao
            FROM profissional p
            JOIN conhecimento c ON p.id = c.id_profissional
            WHERE c.nome = ?
            ORDER BY p.id
            "#,
        )
        .bind(knowledge_name)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Remove os profissionais com nome exatamente igual a `name` e devolve
    /// quantos foram removidos (0 ou 1, dada a unicidade).
    ///
    /// Os conhecimentos do profissional removido saem junto (cascade).
    pub async fn delete_professional_by_name(&self, name: &str) -> StoreResult<u64> {
        let mut tx = self.pool.begin().await?;
        let count = sqlx::query("DELETE FROM profissional WHERE nome = ?")
            .bind(name)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        tx.commit().await?;
        Ok(count)
    }

    // ─── Conhecimento ─────────────────────────────────────────────

    /// Adiciona um conhecimento a um profissional existente.
    ///
    /// A verificação de existência e a inserção são um único `INSERT ...
    /// SELECT`, então a transação começa escrevendo e espera o lock de
    /// escrita pelo busy handler em vez de falhar com "database is locked".
    /// Retorna `Ok(None)` sem escrever nada se o profissional não existir;
    /// caso contrário, a visão completa atualizada do profissional.
    pub async fn add_knowledge(&self, new: &NewKnowledge) -> StoreResult<Option<ProfessionalDetail>> {
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query(
            "INSERT INTO conhecimento (nome, data_insercao, id_profissional) \
             SELECT ?, ?, id FROM profissional WHERE id = ?",
        )
        .bind(&new.name)
        .bind(new.created_at_or_now())
        .bind(new.professional_id)
        .execute(&mut *tx)
        .await
        .map_err(StoreError::from_write)?
        .rows_affected();

        if inserted == 0 {
            // tx descartada: rollback
            return Ok(None);
        }

        let professional = sqlx::query_as::<_, Professional>(
            "SELECT id, nome, celular, email, data_insercao FROM profissional WHERE id = ?",
        )
        .bind(new.professional_id)
        .fetch_one(&mut *tx)
        .await?;

        let knowledge = sqlx::query_as::<_, Knowledge>(
            "SELECT id, nome, data_insercao, id_profissional FROM conhecimento WHERE id_profissional = ? ORDER BY id",
        )
        .bind(professional.id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(ProfessionalDetail {
            professional,
            knowledge,
        }))
    }

    /// Nomes distintos de conhecimento em toda a base, na ordem da primeira
    /// inserção de cada nome.
    pub async fn distinct_knowledge_names(&self) -> StoreResult<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(
            "SELECT nome FROM conhecimento GROUP BY nome ORDER BY MIN(id)",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(names)
    }

    /// Conhecimentos de um profissional, em ordem de inserção. Vazio se o
    /// profissional não tiver nenhum (ou não existir).
    pub async fn knowledge_of(&self, professional_id: ProfessionalId) -> StoreResult<Vec<Knowledge>> {
        let rows = sqlx::query_as::<_, Knowledge>(
            "SELECT id, nome, data_insercao, id_profissional FROM conhecimento WHERE id_profissional = ? ORDER BY id",
        )
        .bind(professional_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Remove TODOS os conhecimentos de um profissional e devolve quantos
    /// foram removidos.
    pub async fn delete_knowledge_of(&self, professional_id: ProfessionalId) -> StoreResult<u64> {
        let mut tx = self.pool.begin().await?;
        let count = sqlx::query("DELETE FROM conhecimento WHERE id_profissional = ?")
            .bind(professional_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        tx.commit().await?;
        Ok(count)
    }
}
