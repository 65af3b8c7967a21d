//! Main menu options

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Login,
    RegisterEmployee,
    RegisterAircraft,
    ListAircraft,
    RegisterPart,
    UpdatePartStatus,
    RegisterStage,
    ListStages,
    AssignEmployee,
    StartStage,
    FinishStage,
    RegisterTest,
    GenerateReport,
    SaveAll,
    Exit,
}

impl MenuChoice {
    /// Menu entries in display order
    pub const ALL: [MenuChoice; 15] = [
        MenuChoice::Login,
        MenuChoice::RegisterEmployee,
        MenuChoice::RegisterAircraft,
        MenuChoice::ListAircraft,
        MenuChoice::RegisterPart,
        MenuChoice::UpdatePartStatus,
        MenuChoice::RegisterStage,
        MenuChoice::ListStages,
        MenuChoice::AssignEmployee,
        MenuChoice::StartStage,
        MenuChoice::FinishStage,
        MenuChoice::RegisterTest,
        MenuChoice::GenerateReport,
        MenuChoice::SaveAll,
        MenuChoice::Exit,
    ];

    pub fn number(&self) -> u8 {
        match self {
            MenuChoice::Exit => 0,
            other => {
                // Position in ALL, counting from 1
                MenuChoice::ALL
                    .iter()
                    .position(|c| c == other)
                    .map_or(0, |i| i as u8 + 1)
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Login => "Login",
            MenuChoice::RegisterEmployee => "Cadastrar Funcionário",
            MenuChoice::RegisterAircraft => "Cadastrar Aeronave",
            MenuChoice::ListAircraft => "Listar Aeronaves",
            MenuChoice::RegisterPart => "Cadastrar Peça",
            MenuChoice::UpdatePartStatus => "Atualizar Status da Peça",
            MenuChoice::RegisterStage => "Cadastrar Etapa",
            MenuChoice::ListStages => "Listar Etapas de Aeronave",
            MenuChoice::AssignEmployee => "Associar Funcionário a Etapa",
            MenuChoice::StartStage => "Iniciar Etapa",
            MenuChoice::FinishStage => "Finalizar Etapa",
            MenuChoice::RegisterTest => "Registrar Teste",
            MenuChoice::GenerateReport => "Gerar Relatório Final (arquivo)",
            MenuChoice::SaveAll => "Salvar todos os dados",
            MenuChoice::Exit => "Sair",
        }
    }

    /// Resolve the number typed at the menu prompt
    pub fn parse(input: &str) -> Option<Self> {
        let number: u8 = input.trim().parse().ok()?;
        MenuChoice::ALL.into_iter().find(|c| c.number() == number)
    }
}

impl std::fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}
