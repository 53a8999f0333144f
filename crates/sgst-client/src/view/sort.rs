//! Sortable column state.

use sgst_types::OrderDir;
use std::str::FromStr;

/// Columns of the equipment table the backend can sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EquipoColumn {
    NumSerie,
    Marca,
    Modelo,
    FechaRegistro,
}

impl EquipoColumn {
    pub const ALL: [Self; 4] = [Self::NumSerie, Self::Marca, Self::Modelo, Self::FechaRegistro];

    /// Wire name sent as `order_by`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NumSerie => "num_serie",
            Self::Marca => "marca_equipo",
            Self::Modelo => "modelo_equipo",
            Self::FechaRegistro => "fecha_registro",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NumSerie => "Núm. serie",
            Self::Marca => "Marca",
            Self::Modelo => "Modelo",
            Self::FechaRegistro => "Registro",
        }
    }
}

impl std::fmt::Display for EquipoColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EquipoColumn {
    type Err = String;

    /// Accepts the wire name or a short alias (`serie`, `marca`, `modelo`, `fecha`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "num_serie" | "serie" => Ok(Self::NumSerie),
            "marca_equipo" | "marca" => Ok(Self::Marca),
            "modelo_equipo" | "modelo" => Ok(Self::Modelo),
            "fecha_registro" | "fecha" => Ok(Self::FechaRegistro),
            other => Err(format!(
                "Unknown column '{other}'. Use: num_serie, marca_equipo, modelo_equipo, fecha_registro"
            )),
        }
    }
}

/// Active sort column and direction. No column means server order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<C> {
    column: Option<C>,
    dir: OrderDir,
}

impl<C> Default for SortState<C> {
    fn default() -> Self {
        Self { column: None, dir: OrderDir::Asc }
    }
}

impl<C: Copy + PartialEq> SortState<C> {
    pub const fn column(&self) -> Option<C> {
        self.column
    }

    pub const fn dir(&self) -> OrderDir {
        self.dir
    }

    /// Header click: same column toggles, any other column starts ascending.
    pub fn click(&mut self, column: C) {
        if self.column == Some(column) {
            self.dir = self.dir.toggled();
        } else {
            self.column = Some(column);
            self.dir = OrderDir::Asc;
        }
    }

    pub fn set(&mut self, column: C, dir: OrderDir) {
        self.column = Some(column);
        self.dir = dir;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Arrow shown next to `column` in the header.
    pub fn indicator(&self, column: C) -> &'static str {
        match (self.column == Some(column), self.dir) {
            (false, _) => "↕",
            (true, OrderDir::Asc) => "▲",
            (true, OrderDir::Desc) => "▼",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_cycle() {
        let mut sort = SortState::default();
        assert_eq!(sort.column(), None);

        sort.click(EquipoColumn::NumSerie);
        assert_eq!((sort.column(), sort.dir()), (Some(EquipoColumn::NumSerie), OrderDir::Asc));

        sort.click(EquipoColumn::NumSerie);
        assert_eq!(sort.dir(), OrderDir::Desc);

        sort.click(EquipoColumn::Marca);
        assert_eq!((sort.column(), sort.dir()), (Some(EquipoColumn::Marca), OrderDir::Asc));

        sort.click(EquipoColumn::Marca);
        sort.click(EquipoColumn::Marca);
        assert_eq!(sort.dir(), OrderDir::Asc);
    }

    #[test]
    fn test_indicator() {
        let mut sort = SortState::default();
        sort.set(EquipoColumn::Modelo, OrderDir::Desc);
        assert_eq!(sort.indicator(EquipoColumn::Modelo), "▼");
        assert_eq!(sort.indicator(EquipoColumn::Marca), "↕");
    }

    #[test]
    fn test_column_parsing() {
        for column in EquipoColumn::ALL {
            assert_eq!(column.as_str().parse::<EquipoColumn>(), Ok(column));
        }
        assert_eq!("Fecha".parse::<EquipoColumn>(), Ok(EquipoColumn::FechaRegistro));
        assert!("descripcion_equipo".parse::<EquipoColumn>().is_err());
    }
}
