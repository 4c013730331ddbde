use crate::core::error::AppError;
use crate::core::params::check_int;

use ParamKind::{Int, Text};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Int,
    Text,
}

impl ParamKind {
    pub fn check(self, name: &str, raw: &str) -> Result<(), AppError> {
        match self {
            Self::Int => check_int(name, raw),
            Self::Text => Ok(()),
        }
    }
}

#[derive(Debug)]
pub struct QueryParam {
    pub name: &'static str,
    pub alias: &'static str,
    pub kind: ParamKind,
}

impl QueryParam {
    pub fn matches(&self, key: &str) -> bool {
        self.name == key || self.alias == key
    }
}

#[derive(Debug)]
pub struct StubRoute {
    pub path: &'static str,
    pub tag: &'static str,
    pub id_kind: Option<ParamKind>,
    pub query: &'static [QueryParam],
    pub message: &'static str,
}

impl StubRoute {
    pub fn render(&self, id: Option<&str>) -> String {
        match id {
            Some(id) => self.message.replace("{id}", id),
            None => self.message.to_string(),
        }
    }
}

const fn int(name: &'static str, alias: &'static str) -> QueryParam {
    QueryParam {
        name,
        alias,
        kind: ParamKind::Int,
    }
}

const fn text(name: &'static str, alias: &'static str) -> QueryParam {
    QueryParam {
        name,
        alias,
        kind: ParamKind::Text,
    }
}

const fn collection(
    path: &'static str,
    tag: &'static str,
    query: &'static [QueryParam],
    message: &'static str,
) -> StubRoute {
    StubRoute {
        path,
        tag,
        id_kind: None,
        query,
        message,
    }
}

const fn member(
    path: &'static str,
    tag: &'static str,
    id_kind: ParamKind,
    query: &'static [QueryParam],
    message: &'static str,
) -> StubRoute {
    StubRoute {
        path,
        tag,
        id_kind: Some(id_kind),
        query,
        message,
    }
}

const NO_QUERY: &[QueryParam] = &[];
const DATE_RANGE: &[QueryParam] = &[
    text("startDate", "dataInicio"),
    text("endDate", "dataFim"),
];
const BY_LEGISLATURE: &[QueryParam] = &[int("legislatureId", "idLegislatura")];
const BY_ACRONYM_AND_DATES: &[QueryParam] = &[
    text("acronym", "sigla"),
    text("startDate", "dataInicio"),
    text("endDate", "dataFim"),
];
const EXPENSES_QUERY: &[QueryParam] = &[
    int("legislatureId", "idLegislatura"),
    int("year", "ano"),
    int("month", "mes"),
    text("supplierTaxId", "cnpjCpfFornecedor"),
    int("page", "pagina"),
    int("pageSize", "itens"),
    text("orderBy", "ordenarPor"),
];
const VOTES_QUERY: &[QueryParam] = &[
    text("startDate", "dataInicio"),
    text("endDate", "dataFim"),
    int("billId", "idProposicao"),
];
const BILLS_QUERY: &[QueryParam] = &[
    int("year", "ano"),
    text("typeCode", "siglaTipo"),
    int("number", "numero"),
    int("authorDeputyId", "idDeputadoAutor"),
];
const LEGISLATURES_QUERY: &[QueryParam] = &[int("id", "id"), text("date", "data")];
const EVENTS_QUERY: &[QueryParam] = &[
    text("startDate", "dataInicio"),
    text("endDate", "dataFim"),
    int("bodyId", "idOrgao"),
];
const GROUPS_QUERY: &[QueryParam] = &[int("id", "id"), int("legislatureId", "idLegislatura")];

// `//partidos/{id}/lideres` in the legacy router is served here as `/parties/:id/leaders`.
pub static STUB_ROUTES: &[StubRoute] = &[
    // Deputies
    member(
        "/deputies/:id/expenses",
        "Deputies",
        Int,
        EXPENSES_QUERY,
        "Endpoint para despesas do deputado com ID: {id}. (Não implementado)",
    ),
    member(
        "/deputies/:id/speeches",
        "Deputies",
        Int,
        DATE_RANGE,
        "Endpoint para discursos do deputado com ID: {id}. (Não implementado)",
    ),
    member(
        "/deputies/:id/events",
        "Deputies",
        Int,
        NO_QUERY,
        "Endpoint para eventos do deputado com ID: {id}. (Não implementado)",
    ),
    member(
        "/deputies/:id/fronts",
        "Deputies",
        Int,
        NO_QUERY,
        "Endpoint para frentes do deputado com ID: {id}. (Não implementado)",
    ),
    member(
        "/deputies/:id/occupations",
        "Deputies",
        Int,
        NO_QUERY,
        "Endpoint para ocupações do deputado com ID: {id}. (Não implementado)",
    ),
    member(
        "/deputies/:id/bodies",
        "Deputies",
        Int,
        NO_QUERY,
        "Endpoint para órgãos do deputado com ID: {id}. (Não implementado)",
    ),
    member(
        "/deputies/:id/history",
        "Deputies",
        Int,
        DATE_RANGE,
        "Endpoint para histórico do deputado com ID: {id}. (Não implementado)",
    ),
    member(
        "/deputies/:id/externalMandates",
        "Deputies",
        Int,
        NO_QUERY,
        "Endpoint para mandatos externos do deputado com ID: {id}. (Não implementado)",
    ),
    member(
        "/deputies/:id/professions",
        "Deputies",
        Int,
        NO_QUERY,
        "Endpoint para profissões do deputado com ID: {id}. (Não implementado)",
    ),
    // Fronts
    collection(
        "/fronts",
        "Fronts",
        BY_LEGISLATURE,
        "Endpoint para listar frentes. (Não implementado)",
    ),
    member(
        "/fronts/:id",
        "Fronts",
        Int,
        NO_QUERY,
        "Endpoint para detalhes da frente com ID: {id}. (Não implementado)",
    ),
    member(
        "/fronts/:id/members",
        "Fronts",
        Int,
        NO_QUERY,
        "Endpoint para membros da frente com ID: {id}. (Não implementado)",
    ),
    // Parties
    collection(
        "/parties",
        "Parties",
        BY_ACRONYM_AND_DATES,
        "Endpoint para listar partidos. (Não implementado)",
    ),
    member(
        "/parties/:id",
        "Parties",
        Int,
        NO_QUERY,
        "Endpoint para detalhes do partido com ID: {id}. (Não implementado)",
    ),
    member(
        "/parties/:id/members",
        "Parties",
        Int,
        NO_QUERY,
        "Endpoint para membros do partido com ID: {id}. (Não implementado)",
    ),
    member(
        "/parties/:id/leaders",
        "Parties",
        Int,
        NO_QUERY,
        "Endpoint para líderes do partido com ID: {id}. (Não implementado)",
    ),
    // Votes
    collection(
        "/votes",
        "Votes",
        VOTES_QUERY,
        "Endpoint para listar votações. (Não implementado)",
    ),
    member(
        "/votes/:id",
        "Votes",
        Text,
        NO_QUERY,
        "Endpoint para detalhes da votação com ID: {id}. (Não implementado)",
    ),
    member(
        "/votes/:id/ballots",
        "Votes",
        Text,
        NO_QUERY,
        "Endpoint para votos da votação com ID: {id}. (Não implementado)",
    ),
    member(
        "/votes/:id/orientations",
        "Votes",
        Text,
        NO_QUERY,
        "Endpoint para orientações da votação com ID: {id}. (Não implementado)",
    ),
    // Bills
    collection(
        "/bills",
        "Bills",
        BILLS_QUERY,
        "Endpoint para listar proposições. (Não implementado)",
    ),
    member(
        "/bills/:id",
        "Bills",
        Int,
        NO_QUERY,
        "Endpoint para detalhes da proposição com ID: {id}. (Não implementado)",
    ),
    member(
        "/bills/:id/authors",
        "Bills",
        Int,
        NO_QUERY,
        "Endpoint para autores da proposição com ID: {id}. (Não implementado)",
    ),
    member(
        "/bills/:id/related",
        "Bills",
        Int,
        NO_QUERY,
        "Endpoint para proposições relacionadas com ID: {id}. (Não implementado)",
    ),
    member(
        "/bills/:id/proceedings",
        "Bills",
        Int,
        NO_QUERY,
        "Endpoint para tramitações da proposição com ID: {id}. (Não implementado)",
    ),
    member(
        "/bills/:id/votes",
        "Bills",
        Int,
        NO_QUERY,
        "Endpoint para votações da proposição com ID: {id}. (Não implementado)",
    ),
    member(
        "/bills/:id/themes",
        "Bills",
        Int,
        NO_QUERY,
        "Endpoint para temas da proposição com ID: {id}. (Não implementado)",
    ),
    // Legislatures
    collection(
        "/legislatures",
        "Legislatures",
        LEGISLATURES_QUERY,
        "Endpoint para listar legislaturas. (Não implementado)",
    ),
    member(
        "/legislatures/:id",
        "Legislatures",
        Int,
        NO_QUERY,
        "Endpoint para detalhes da legislatura com ID: {id}. (Não implementado)",
    ),
    member(
        "/legislatures/:id/board",
        "Legislatures",
        Int,
        NO_QUERY,
        "Endpoint para mesa da legislatura com ID: {id}. (Não implementado)",
    ),
    member(
        "/legislatures/:id/leaders",
        "Legislatures",
        Int,
        NO_QUERY,
        "Endpoint para líderes da legislatura com ID: {id}. (Não implementado)",
    ),
    // Bodies
    collection(
        "/bodies",
        "Bodies",
        BY_ACRONYM_AND_DATES,
        "Endpoint para listar órgãos. (Não implementado)",
    ),
    member(
        "/bodies/:id",
        "Bodies",
        Int,
        NO_QUERY,
        "Endpoint para detalhes do órgão com ID: {id}. (Não implementado)",
    ),
    member(
        "/bodies/:id/events",
        "Bodies",
        Int,
        NO_QUERY,
        "Endpoint para eventos do órgão com ID: {id}. (Não implementado)",
    ),
    member(
        "/bodies/:id/members",
        "Bodies",
        Int,
        NO_QUERY,
        "Endpoint para membros do órgão com ID: {id}. (Não implementado)",
    ),
    member(
        "/bodies/:id/votes",
        "Bodies",
        Int,
        NO_QUERY,
        "Endpoint para votações do órgão com ID: {id}. (Não implementado)",
    ),
    // Events
    collection(
        "/events",
        "Events",
        EVENTS_QUERY,
        "Endpoint para listar eventos. (Não implementado)",
    ),
    member(
        "/events/:id",
        "Events",
        Int,
        NO_QUERY,
        "Endpoint para detalhes do evento com ID: {id}. (Não implementado)",
    ),
    member(
        "/events/:id/deputies",
        "Events",
        Int,
        NO_QUERY,
        "Endpoint para deputados do evento com ID: {id}. (Não implementado)",
    ),
    member(
        "/events/:id/bodies",
        "Events",
        Int,
        NO_QUERY,
        "Endpoint para órgãos do evento com ID: {id}. (Não implementado)",
    ),
    member(
        "/events/:id/agenda",
        "Events",
        Int,
        NO_QUERY,
        "Endpoint para pauta do evento com ID: {id}. (Não implementado)",
    ),
    member(
        "/events/:id/votes",
        "Events",
        Int,
        NO_QUERY,
        "Endpoint para votações do evento com ID: {id}. (Não implementado)",
    ),
    // Blocs
    collection(
        "/blocs",
        "Blocs",
        BY_LEGISLATURE,
        "Endpoint para listar blocos. (Não implementado)",
    ),
    member(
        "/blocs/:id",
        "Blocs",
        Text,
        NO_QUERY,
        "Endpoint para detalhes do bloco com ID: {id}. (Não implementado)",
    ),
    // Groups
    collection(
        "/groups",
        "Groups",
        GROUPS_QUERY,
        "Endpoint para listar grupos. (Não implementado)",
    ),
    member(
        "/groups/:id",
        "Groups",
        Int,
        NO_QUERY,
        "Endpoint para detalhes do grupo com ID: {id}. (Não implementado)",
    ),
    member(
        "/groups/:id/members",
        "Groups",
        Int,
        NO_QUERY,
        "Endpoint para membros do grupo com ID: {id}. (Não implementado)",
    ),
    // References
    collection(
        "/references/bills/typeCodes",
        "References",
        NO_QUERY,
        "Endpoint para listar tipos de proposição. (Não implementado)",
    ),
    collection(
        "/references/bills/themes",
        "References",
        NO_QUERY,
        "Endpoint para listar temas de proposições. (Não implementado)",
    ),
    collection(
        "/references/deputyStatuses",
        "References",
        NO_QUERY,
        "Endpoint para listar situações de deputado. (Não implementado)",
    ),
    collection(
        "/references/billStatuses",
        "References",
        NO_QUERY,
        "Endpoint para listar situações de proposição. (Não implementado)",
    ),
    collection(
        "/references/bodyTypes",
        "References",
        NO_QUERY,
        "Endpoint para listar tipos de órgão. (Não implementado)",
    ),
    collection(
        "/references/states",
        "References",
        NO_QUERY,
        "Endpoint para listar UFs. (Não implementado)",
    ),
];

pub fn find_route(path: &str) -> Option<&'static StubRoute> {
    STUB_ROUTES.iter().find(|route| route.path == path)
}
