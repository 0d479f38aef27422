// Headings shared by the on-screen label and the print document.

pub const BRAND_ALT: &str = "Brisanet Logo";

pub const TRANSFER_SECTION: &str = "DADOS DA TRANSFERÊNCIA:";
pub const ROUTE_SECTION: &str = "ORIGEM / DESTINO:";

pub const TRANSACTION: &str = "TRANSAÇÃO:";
pub const TICKET: &str = "TICKET:";
pub const VOLUME: &str = "VOLUME:";
pub const QUANTITY_PIECES: &str = "QTD DE PEÇAS:";
pub const INVOICE_NUMBER: &str = "NÚMERO DE NF:";
pub const SAP_ORDER: &str = "PEDIDO SAP:";
pub const FROM: &str = "DE:";
pub const TO: &str = "PARA:";

pub const BARCODE_ERROR_PREFIX: &str = "Erro ao gerar código de barras";
